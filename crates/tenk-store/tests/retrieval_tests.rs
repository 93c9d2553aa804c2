//! Integration tests for passage retrieval over realistic section text

use tenk_domain::traits::Retriever;
use tenk_store::{IndexConfig, PassageIndex};

fn business_section() -> String {
    let mut text = String::new();
    for paragraph in [
        "NVIDIA pioneered accelerated computing to help solve the most challenging computational problems.",
        "Our Data Center platform is focused on accelerating the most compute-intensive workloads, such as AI, data analytics, graphics and scientific computing.",
        "Our Gaming platform leverages our GPUs and sophisticated software to enhance the gaming experience.",
        "We have a broad portfolio of intellectual property and rely on patents, trademarks and trade secrets.",
        "As of the end of the fiscal year, we had approximately 29,600 employees in 36 countries.",
    ] {
        for _ in 0..4 {
            text.push_str(paragraph);
            text.push(' ');
        }
        text.push_str("\n\n");
    }
    text
}

#[tokio::test]
async fn test_top_k_is_bounded_and_ordered() {
    let index = PassageIndex::new(&IndexConfig::default()).unwrap();
    let added = index.add_documents(&[business_section()]).unwrap();
    assert!(added > 1, "section should span several chunks");

    let results = index.search("how many employees does the company have", 3).await.unwrap();
    assert!(!results.is_empty());
    assert!(results.len() <= 3);
    for pair in results.windows(2) {
        assert!(pair[0].relevance_score >= pair[1].relevance_score);
    }
    assert!(results.iter().all(|p| p.relevance_score.is_finite()));
    assert!(results[0].content.contains("employees"));
}

#[tokio::test]
async fn test_sessions_are_independent() {
    let nvidia = PassageIndex::new(&IndexConfig::default()).unwrap();
    let other = PassageIndex::new(&IndexConfig::default()).unwrap();
    nvidia.add_documents(&[business_section()]).unwrap();

    assert!(other.is_empty());
    assert!(other.search("GPUs", 5).await.unwrap().is_empty());
    assert!(!nvidia.search("GPUs", 5).await.unwrap().is_empty());
}
