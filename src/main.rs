#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(
    name = "avro2types",
    about = "Generate Flow or TypeScript type declarations from Avro schemas"
)]
struct Cli {
    /// Path or URL to the Avro schema input
    #[arg(value_name = "AVSC")]
    input: String,

    /// Path to the generated type declaration file
    #[arg(value_name = "TYPES")]
    output: String,

    /// Output syntax
    #[arg(long, value_enum, default_value = "flow")]
    target: avrotypes::Target,

    /// Emit bare primitive union branches instead of tagged objects
    #[arg(long, default_value_t = false)]
    no_wrap_primitives: bool,

    /// Name override for the root declaration
    #[arg(long)]
    root_name: Option<String>,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    let options = avrotypes::GeneratorOptions {
        target: cli.target,
        wrap_primitives: !cli.no_wrap_primitives,
        root_name: cli.root_name,
    };

    if let Err(e) = avrotypes::convert_avro_to_types(&cli.input, &cli.output, &options) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This binary is only available with the `cli` feature enabled.");
    std::process::exit(1);
}
