use std::{error::Error, path::Path};

use clap::Parser;
use geomtab::latex::make_table;
use xyz::Geom;

/// convert an XYZ geometry to a LaTeX table for papers
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// XYZ geometry file to convert
    #[arg(value_parser)]
    infile: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::try_parse().unwrap_or_else(|e| {
        if e.use_stderr() {
            // missing or extra arguments
            let _ = e.print();
            std::process::exit(1);
        }
        e.exit()
    });
    let name = Path::new(&args.infile)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();
    let geom = Geom::load(&args.infile)?;
    println!("{} atoms\n", geom.len());
    print!("{}", make_table(&name, &geom.atoms)?);
    Ok(())
}
