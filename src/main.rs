use clap::{Parser, Subcommand};
use nkcimg::prom::PromKind;
use nkcimg::{floppy, prom};
use std::io;
use std::path::Path;
use std::process;

//===========================================================================//

#[derive(Parser)]
#[clap(author, about, long_about = None, version)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Creates a blank 800kB floppy disk image named `floppy.img`.
    Floppy,
    /// Creates a blank EPROM image named `prom.bin`.
    Prom {
        /// The chip type to create: 1 (2716), 2 (2732), or 3 (2764).
        selector: Option<u32>,
    },
}

//===========================================================================//

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Floppy => {
            floppy::blank_image().save(Path::new(floppy::IMAGE_FILE_NAME))?;
        }
        Command::Prom { selector } => {
            match selector {
                Some(value) => println!("selector argument: {}", value),
                None => println!("no selector argument given"),
            }
            let selector =
                selector.unwrap_or_else(|| PromKind::DEFAULT.selector());
            let kind = match PromKind::from_selector(selector) {
                Some(kind) => kind,
                None => {
                    println!(
                        "Valid arguments are 1 (2716 PROM), \
                         2 (2732 PROM) or 3 (2764 PROM)"
                    );
                    // This line matches the existing tooling's output; the
                    // fallback it describes is never applied, and an
                    // out-of-range selector always exits without writing.
                    println!(
                        "Defaulting to 2764 PROM if no argument is passed"
                    );
                    process::exit(1);
                }
            };
            prom::blank_image(kind).save(Path::new(prom::IMAGE_FILE_NAME))?;
            println!("Created {} PROM file {}!", kind, prom::IMAGE_FILE_NAME);
        }
    }
    Ok(())
}

//===========================================================================//
