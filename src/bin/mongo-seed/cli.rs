use clap::Parser;

/// Inserts the fixed sample batch into the sample_items collection of the
/// MONGODB_URI deployment. Takes no arguments.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {}
