use attrbind::config::DemoConfig;
use attrbind::errors::AppError;
use attrbind::pipeline::{ClusteringPipeline, LingoClusterer, Tokenizer};
use attrbind_core::{bind, describe, AttributeBinding, BindingDirection};

const SAMPLE_DOCUMENTS: &[&str] = &["Rust ownership and borrowing explained",
                                    "Borrowing rules in practice",
                                    "Ownership of heap data",
                                    "Clustering search results with Lingo",
                                    "Rust macros by example"];

fn print_keys(title: &str, bindings: &[AttributeBinding]) {
    println!("[keys] {title}");
    for b in bindings {
        println!("  {:<6} {}", b.direction.to_string(), b.key);
    }
}

fn run() -> Result<(), AppError> {
    let cfg = DemoConfig::from_env()?;

    print_keys("pipeline", &describe::<ClusteringPipeline>());
    print_keys("tokenizer", &describe::<Tokenizer>());
    print_keys("clusterer", &describe::<LingoClusterer>());

    let mut pipeline = ClusteringPipeline::shared();
    let mut params = cfg.params;
    bind(&mut pipeline, &mut params, cfg.direction)?;

    let built = pipeline.run(SAMPLE_DOCUMENTS);
    println!("[run] {} documentos -> {} clusters", SAMPLE_DOCUMENTS.len(), built);

    if cfg.direction.includes_out() {
        bind(&mut pipeline, &mut params, BindingDirection::Out)?;
    }
    println!("{}", serde_json::to_string_pretty(&params)?);
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("[attrbind] Error: {e}");
        std::process::exit(1);
    }
}
