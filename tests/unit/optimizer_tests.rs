// Optimizer behaviour through the public API

use image_url_optimizer::{
    optimize, ImageUrlOptimizer, OptimizerConfig, OutputFormat, TransformRequest,
};
use rstest::rstest;

const CDN_URL: &str = "https://res.cloudinary.com/demo/image/upload/v123/products/abc.webp";

fn example_cdn_optimizer() -> ImageUrlOptimizer {
    ImageUrlOptimizer::new(OptimizerConfig {
        host_marker: "cdn.example".to_string(),
        ..Default::default()
    })
}

#[rstest]
#[case(None)]
#[case(Some(""))]
fn test_missing_reference_returns_placeholder(#[case] url: Option<&str>) {
    assert_eq!(
        optimize(url, &TransformRequest::default()),
        "/placeholder.svg"
    );
    assert_eq!(
        optimize(url, &TransformRequest::with_width(10).height(10)),
        "/placeholder.svg"
    );
}

#[rstest]
#[case("/images/hero.jpg")]
#[case("https://via.placeholder.com/400x300")]
#[case("http://example.com/image/upload/v1/a.jpg")]
#[case("   ")]
#[case("data:image/png;base64,iVBORw0KGgo=")]
fn test_non_cdn_urls_pass_through(#[case] url: &str) {
    let requests = [
        TransformRequest::default(),
        TransformRequest::with_width(1200)
            .height(600)
            .quality("90")
            .format("png"),
    ];
    for request in &requests {
        assert_eq!(optimize(Some(url), request), url);
    }
}

#[rstest]
#[case("https://res.cloudinary.com/demo/image/fetch/https://example.com/a.jpg")]
#[case("https://res.cloudinary.com/demo/image/private/v1/a.jpg")]
#[case("https://res.cloudinary.com/")]
fn test_cdn_url_without_upload_marker_is_unchanged(#[case] url: &str) {
    assert_eq!(optimize(Some(url), &TransformRequest::default()), url);
}

#[test]
fn test_segment_inserted_between_marker_and_version() {
    let url = "https://cdn.example/demo/image/upload/v123/products/abc.webp";
    let optimized = example_cdn_optimizer().optimize(Some(url), &TransformRequest::default());

    assert_eq!(
        optimized,
        "https://cdn.example/demo/image/upload/w_400,c_scale,q_auto,f_auto/v123/products/abc.webp"
    );
    assert!(optimized.contains("/upload/w_400,c_scale,q_auto,f_auto/v123/"));
}

#[test]
fn test_segment_inserted_without_version() {
    assert_eq!(
        optimize(
            Some("https://res.cloudinary.com/demo/image/upload/products/abc.webp"),
            &TransformRequest::default()
        ),
        "https://res.cloudinary.com/demo/image/upload/w_400,c_scale,q_auto,f_auto/products/abc.webp"
    );
}

#[rstest]
#[case(TransformRequest::with_width(400))]
#[case(TransformRequest::with_width(294).height(200))]
#[case(TransformRequest::with_width(800).quality("80").format("webp"))]
fn test_optimize_is_idempotent(#[case] request: TransformRequest) {
    let once = optimize(Some(CDN_URL), &request);
    let twice = optimize(Some(once.as_str()), &request);
    assert_eq!(once, twice);
    assert_eq!(once.matches("w_").count(), 1);
}

#[test]
fn test_reoptimizing_with_new_size_supersedes_directives() {
    let small = optimize(Some(CDN_URL), &TransformRequest::with_width(294).height(200));
    let large = optimize(Some(small.as_str()), &TransformRequest::with_width(800));

    assert_eq!(large, optimize(Some(CDN_URL), &TransformRequest::with_width(800)));
    assert!(!large.contains("h_200"));
    assert!(!large.contains("c_fill"));
}

#[test]
fn test_height_requests_crop_fill() {
    let optimized = optimize(Some(CDN_URL), &TransformRequest::default().height(300));
    assert!(optimized.contains("h_300"));
    assert!(optimized.contains("c_fill"));
    assert!(!optimized.contains("c_scale"));
    assert!(optimized.contains("/upload/w_400,h_300,c_fill,q_auto,f_auto/v123/"));
}

#[test]
fn test_insecure_scheme_is_upgraded() {
    let optimized = optimize(
        Some("http://res.cloudinary.com/demo/image/upload/v123/products/abc.webp"),
        &TransformRequest::default(),
    );
    assert!(optimized.starts_with("https://"));
    assert_eq!(
        optimized,
        "https://res.cloudinary.com/demo/image/upload/w_400,c_scale,q_auto,f_auto/v123/products/abc.webp"
    );
}

#[test]
fn test_explicit_format_token() {
    let request = TransformRequest {
        format: OutputFormat::Named("avif".to_string()),
        ..Default::default()
    };
    let optimized = optimize(Some(CDN_URL), &request);
    assert!(optimized.contains(",f_avif/"));
    assert!(!optimized.contains("f_auto"));
}

#[rstest]
#[case("not a url cloudinary.com")]
#[case("cloudinary.com/demo/image/upload/a.jpg")]
#[case("https://res.cloudinary.com:99999/demo/image/upload/a.jpg")]
#[case("https://[res.cloudinary.com/demo/image/upload/a.jpg")]
#[case("mailto:upload@cloudinary.com")]
fn test_malformed_cdn_urls_are_returned_unchanged(#[case] url: &str) {
    assert_eq!(optimize(Some(url), &TransformRequest::default()), url);
}

#[test]
fn test_underscored_folder_after_marker_is_replaced() {
    // The existing-transformation check is shape based; a folder such as
    // `summer_sale` directly after the marker is taken for directives.
    let optimized = optimize(
        Some("https://res.cloudinary.com/demo/image/upload/summer_sale/abc.jpg"),
        &TransformRequest::default(),
    );
    assert_eq!(
        optimized,
        "https://res.cloudinary.com/demo/image/upload/w_400,c_scale,q_auto,f_auto/abc.jpg"
    );
}

#[test]
fn test_concurrent_calls_share_optimizer() {
    let optimizer = std::sync::Arc::new(ImageUrlOptimizer::default());
    let expected = optimizer.optimize(Some(CDN_URL), &TransformRequest::default());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let optimizer = optimizer.clone();
            std::thread::spawn(move || {
                optimizer.optimize(Some(CDN_URL), &TransformRequest::default())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[rstest]
#[case(TransformRequest::default().quality("auto/x"))]
#[case(TransformRequest::default().format("webp/x"))]
#[case(TransformRequest::default().quality("80?x=1"))]
#[case(TransformRequest::default().format("png#top"))]
#[case(TransformRequest::default().quality("auto\\x"))]
fn test_tokens_with_path_characters_leave_url_unchanged(#[case] request: TransformRequest) {
    assert_eq!(optimize(Some(CDN_URL), &request), CDN_URL);

    let once = optimize(Some(CDN_URL), &TransformRequest::default());
    assert_eq!(optimize(Some(once.as_str()), &request), once);
}

#[rstest]
#[case(TransformRequest::with_width(0))]
#[case(TransformRequest::default().quality(""))]
#[case(TransformRequest::default().quality("  "))]
fn test_unusable_size_or_quality_leaves_url_unchanged(#[case] request: TransformRequest) {
    let optimized = optimize(Some(CDN_URL), &request);
    assert_eq!(optimized, CDN_URL);
    assert!(!optimized.contains("w_0"));
    assert!(!optimized.contains("q_,"));
}
