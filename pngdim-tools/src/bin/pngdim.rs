use tracing_subscriber::prelude::*;

fn main() {
    let Some(path) = std::env::args_os().nth(1) else {
        eprintln!("Usage: pngdim <FILE>");
        std::process::exit(2);
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(
            tracing_subscriber::fmt::Layer::default()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();

    // Every outcome is one line on stdout with exit status 0, failed reads
    // included
    match pngdim::inspect(&path) {
        Ok(verdict) => println!("{verdict}"),
        Err(err) => println!("{err}"),
    }
}
