// Module declarations
mod builder;
mod cli;
mod config;
mod content;
mod directory;
mod render;
mod seo;
mod utils;

fn main() {
    // Run the CLI
    std::process::exit(cli::run());
}
