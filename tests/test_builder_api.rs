use social_content_generator::{
    AppConfig, Backend, ContentGenerator, ContentType, GeneratorError, Platform, ProviderError,
    Tone,
};

#[tokio::test]
async fn test_builder_templates_one_post_per_platform() {
    let package = ContentGenerator::builder()
        .topic("marketing automation")
        .content_type(ContentType::Promotional)
        .platform(Platform::LinkedIn)
        .platform(Platform::Twitter)
        .tone(Tone::Professional)
        .cta("Book a demo")
        .seed(8)
        .build()
        .await
        .unwrap();

    let platforms: Vec<Platform> = package.posts.iter().map(|p| p.platform).collect();
    assert_eq!(platforms, vec![Platform::LinkedIn, Platform::Twitter]);
    for post in &package.posts {
        assert!(post.text.contains("marketing automation"));
        assert!(post.text.ends_with("Book a demo"));
        assert!(!post.text.contains('!'));
        assert_eq!(post.content_type, ContentType::Promotional);
        assert_eq!(post.hashtags.len(), 5);
        assert!(post.id.is_none());
    }
    // "marketing" in the topic pulls from the marketing category
    assert!(package.hashtags.iter().any(|t| t == "#marketing"));
}

#[tokio::test]
async fn test_builder_same_seed_same_package() {
    let run = || {
        ContentGenerator::builder()
            .topic("winter hiking")
            .platforms(Platform::ALL)
            .tone(Tone::Casual)
            .seed(77)
            .build()
    };
    let a = run().await.unwrap();
    let b = run().await.unwrap();
    let texts = |p: &social_content_generator::ContentPackage| {
        p.posts.iter().map(|x| x.text.clone()).collect::<Vec<_>>()
    };
    assert_eq!(texts(&a), texts(&b));
    assert_eq!(a.hashtags, b.hashtags);
    assert_eq!(a.summary, b.summary);
}

#[tokio::test]
async fn test_builder_without_topic_fails() {
    let result = ContentGenerator::builder()
        .platform(Platform::Twitter)
        .build()
        .await;
    assert!(matches!(result, Err(GeneratorError::BuilderError(_))));
}

#[tokio::test]
async fn test_builder_unknown_default_provider() {
    let config = AppConfig {
        default_provider: "carrier-pigeon".to_string(),
        ..Default::default()
    };
    let result = ContentGenerator::builder()
        .topic("coffee")
        .model("some-model")
        .config(config)
        .build()
        .await;
    assert!(matches!(
        result,
        Err(GeneratorError::Provider(ProviderError::UnknownProvider(_)))
    ));
}

/// Talks to the real OpenRouter API
#[tokio::test]
#[ignore]
async fn test_builder_openrouter_live() {
    let api_key = std::env::var("OPENROUTER_API_KEY").unwrap();
    let package = ContentGenerator::builder()
        .topic("cold brew coffee")
        .platform(Platform::Twitter)
        .provider(Backend::OpenRouter)
        .api_key(api_key)
        .build()
        .await
        .unwrap();
    assert_eq!(package.posts.len(), 1);
    assert!(package.posts[0].text.chars().count() <= 280);
}
