use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    init_tracing();

    if let Err(e) = bestfirst::solver() {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
