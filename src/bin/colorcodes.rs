//! Reads a color in any supported notation from the command line and prints it in every notation.
//!
//! Exits with 0 on success, 1 if the notation was recognized but the color couldn't be read, and 2
//! if the notation wasn't recognized at all.

use std::io::{self, Write};
use std::process;

use clap::Parser;
use colorcodes::prelude::*;
use termion::color;

#[derive(Parser, Debug)]
#[command(name = "colorcodes", version, about = "Convert a color code to every other notation")]
struct Cli {
    /// The color, e.g. `#FF8000` or `hsl(30, 100%, 50%)`. Several words are joined with spaces, so
    /// quoting is optional.
    #[arg(required = true, value_name = "COLOR")]
    text: Vec<String>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
    /// Only print these notations (can be repeated)
    #[arg(long, value_name = "MODEL")]
    only: Vec<ColorModel>,
    /// Don't print a swatch of the color
    #[arg(long)]
    no_swatch: bool,
}

impl Cli {
    fn shows(&self, model: ColorModel) -> bool {
        self.only.is_empty() || self.only.contains(&model)
    }
}

fn print_json(cli: &Cli, conversion: &Conversion) -> io::Result<()> {
    let mut value = serde_json::to_value(conversion)?;
    if let (Conversion::Recognized(_), Some(map)) = (conversion, value.as_object_mut()) {
        map.retain(|name, _| name.parse().map_or(false, |model| cli.shows(model)));
    }
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &value)?;
    writeln!(out)
}

fn print_codes(cli: &Cli, codes: &ColorCodes) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !cli.no_swatch && termion::is_tty(&io::stdout()) {
        let rgb = codes.rgb();
        writeln!(
            out,
            "{}        {}",
            color::Bg(color::Rgb(rgb.r, rgb.g, rgb.b)),
            color::Bg(color::Reset)
        )?;
    }
    let width = codes
        .iter()
        .map(|(model, _)| model.name().len())
        .max()
        .unwrap_or(0);
    for (model, value) in codes {
        if cli.shows(*model) {
            writeln!(out, "{:>width$}: {}", model.name(), value.code(), width = width)?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let text = cli.text.join(" ");

    let conversion = convert(&text).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        process::exit(1);
    });
    log::debug!("{:?} -> {:?}", text, conversion);

    let printed = if cli.json {
        print_json(&cli, &conversion)
    } else {
        match &conversion {
            Conversion::Recognized(codes) => print_codes(&cli, codes),
            Conversion::Unrecognized => {
                eprintln!("error: {:?} is not in any known color notation", text);
                Ok(())
            }
        }
    };
    if let Err(e) = printed {
        eprintln!("error: {}", e);
        process::exit(1);
    }
    if conversion == Conversion::Unrecognized {
        process::exit(2);
    }
}
