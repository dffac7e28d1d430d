//! Grafo de componentes de ejemplo: un pipeline de clustering de documentos.
//!
//! El tokenizer se comparte entre el pipeline y el clusterer (`Rc<RefCell<_>>`),
//! así que un mismo `bind` lo alcanza por dos caminos y lo procesa una vez.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use attrbind_core::bindable;

bindable! {
    bindable(prefix = "tokenizer") struct Tokenizer {
        attributes {
            lowercase: bool = true => In,
            min_token_length: usize = 2 => In,
            tokens_seen: u64 = 0 => Out,
        }
    }
}

bindable! {
    plain struct ClusteringAlgorithm {
        attributes {
            max_clusters: u32 = 20 => InOut as "clusters.max",
            clusters_built: u32 = 0 => Out as "clusters.built",
        }
    }
}

bindable! {
    bindable(prefix = "lingo") struct LingoClusterer extends ClusteringAlgorithm as base {
        attributes {
            label_count: u32 = 3 => InOut,
            phrase_weight: f64 = 1.0 => In,
        }
        references {
            tokenizer: Option<Rc<RefCell<Tokenizer>>> = None,
        }
    }
}

bindable! {
    bindable(prefix = "pipeline") struct ClusteringPipeline {
        attributes {
            query: String = String::new() => In,
            max_results: usize = 100 => InOut,
            processing_time_ms: u64 = 0 => Out,
        }
        references {
            tokenizer: Rc<RefCell<Tokenizer>> = Rc::new(RefCell::new(Tokenizer::default())),
            clusterer: LingoClusterer = LingoClusterer::default(),
        }
    }
}

impl Tokenizer {
    pub fn tokenize(&mut self, text: &str) -> Vec<String> {
        let tokens: Vec<String> = text.split(|c: char| !c.is_alphanumeric())
                                      .filter(|t| t.chars().count() >= self.min_token_length)
                                      .map(|t| if self.lowercase { t.to_lowercase() } else { t.to_string() })
                                      .collect();
        self.tokens_seen += tokens.len() as u64;
        tokens
    }
}

impl ClusteringPipeline {
    /// Pipeline cuyo clusterer reutiliza el tokenizer del pipeline.
    pub fn shared() -> Self {
        let mut pipeline = Self::default();
        pipeline.clusterer.tokenizer = Some(Rc::clone(&pipeline.tokenizer));
        pipeline
    }

    /// Agrupa los documentos por su primer token relevante y actualiza los
    /// atributos de salida. Devuelve la cantidad de clusters construidos.
    pub fn run(&mut self, documents: &[&str]) -> u32 {
        let started = Instant::now();
        let query = self.query.to_lowercase();
        let mut heads: Vec<String> = Vec::new();
        let mut tokenizer = self.tokenizer.borrow_mut();
        for doc in documents.iter().take(self.max_results) {
            let tokens = tokenizer.tokenize(doc);
            if !query.is_empty() && !tokens.iter().any(|t| t.to_lowercase() == query) {
                continue;
            }
            if let Some(head) = tokens.into_iter().next() {
                if !heads.contains(&head) {
                    heads.push(head);
                }
            }
        }
        let built = heads.len().min(self.clusterer.max_clusters as usize) as u32;
        self.clusterer.clusters_built = built;
        self.processing_time_ms = started.elapsed().as_millis() as u64;
        built
    }
}
