use huffman_label::label;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Deterministic, skewed frequencies so the tree is not trivially balanced.
    let freqs = (0..5000i64)
        .map(|i| (i * 7919) % 1000 + i / 10)
        .collect::<Vec<_>>();

    for round in 0..1000 {
        let base = [2, 8, 26][round % 3];
        match label(base, &freqs) {
            Ok(labels) => assert_eq!(labels.len(), freqs.len()),
            Err(e) => {
                tracing::error!(%e, "labeling failed");
                std::process::exit(1);
            }
        }
    }
}
