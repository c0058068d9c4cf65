use clap::Parser;
use cssheet_lib::SheetManifest;
use log::error;
use std::path::PathBuf;

const CSSHEET_INTRO: &str = r#"
                       __              __
      ______________ _/ /_  ___  ___  / /_
     / ___/ ___/ ___/ __ \/ _ \/ _ \/ __/
    / /__(__  |__  ) / / /  __/  __/ /_
    \___/____/____/_/ /_/\___/\___/\__/

    cssheet - build stylesheets from a TOML manifest
"#;

#[derive(Parser)]
#[command(name = "cssheet")]
#[command(about = "Generate CSS from a TOML sheet manifest")]
struct Args {
    /// Sheet manifest (TOML).
    manifest: PathBuf,

    /// Output file, must end in `.css`. Prints to stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also print the generated css when writing to a file.
    #[arg(long)]
    print: bool,

    /// Skip the banner.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::init();

    // parse the args given in terminal
    let args: Args = Args::parse();

    if !args.quiet && args.output.is_some() {
        println!("{}", CSSHEET_INTRO);
    }

    let manifest = match SheetManifest::load(&args.manifest) {
        Ok(manifest) => manifest,
        Err(e) => {
            error!("failed to load {}: {}", args.manifest.display(), e);
            eprintln!("Error reading manifest: {}", e);
            std::process::exit(1);
        }
    };

    let sheet = manifest.build();

    let Some(output) = args.output else {
        print!("{}", sheet.generate());
        return;
    };

    match sheet.generate_to(&output) {
        Ok(css) => {
            println!("Wrote {} rules to {}.", sheet.len(), output.display());
            if args.print {
                print!("{}", css);
            }
        }
        Err(e) => {
            eprintln!("Error writing stylesheet: {}", e);
            if args.print {
                print!("{}", e.css());
            }
            std::process::exit(1);
        }
    }
}
