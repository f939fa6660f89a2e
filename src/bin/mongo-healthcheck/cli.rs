use clap::Parser;

/// Pings the MongoDB deployment named by MONGODB_URI and reports whether it
/// responds. Takes no arguments; configuration comes from the environment.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {}
