use clap::{Parser, Subcommand};
use log::{debug, info};

use social_content_generator::providers::OpenRouterProvider;
use social_content_generator::storage::filter_posts;
use social_content_generator::{
    AppConfig, ComposedPost, ContentGenerator, ContentPackage, ContentType, Platform,
    PostRepository, SqlitePostRepository, Tone, UsageStats,
};

/// Draft social media posts, hashtags and image ideas
#[derive(Parser, Debug)]
#[command(name = "social-content-generator", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate posts for a topic
    Generate {
        /// What the posts are about
        topic: String,

        /// promotional, informative or question (anything else is informative)
        #[arg(long, default_value = "informative")]
        content_type: String,

        /// Target platform; repeat for several. Defaults to the saved settings.
        #[arg(long = "platform")]
        platforms: Vec<Platform>,

        /// professional, casual, humorous or empathetic. Defaults to the saved settings.
        #[arg(long)]
        tone: Option<Tone>,

        /// Call to action appended to each post
        #[arg(long)]
        cta: Option<String>,

        /// Use a remote language model instead of templates
        #[arg(long)]
        llm: bool,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Store the generated posts
        #[arg(long)]
        save: bool,
    },

    /// List saved posts, newest first
    History {
        #[arg(long)]
        platform: Option<Platform>,

        #[arg(long)]
        tone: Option<Tone>,
    },

    /// Delete a saved post
    Delete { id: i64 },

    /// Show or change the saved defaults
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Post counts by platform and tone
    Stats,
}

#[derive(Subcommand, Debug)]
enum SettingsAction {
    Show,
    Set {
        #[arg(long)]
        tone: Option<Tone>,

        /// Replaces the default platforms; repeat for several
        #[arg(long = "platform")]
        platforms: Vec<Platform>,

        /// OpenRouter API key used by `generate --llm`
        #[arg(long)]
        api_key: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    debug!("Using database {}", config.storage.database_url);
    let repo = SqlitePostRepository::connect(&config.storage.database_url).await?;

    match cli.command {
        Commands::Generate {
            topic,
            content_type,
            platforms,
            tone,
            cta,
            llm,
            seed,
            save,
        } => {
            let settings = repo.load_settings().await?;
            let platforms = if platforms.is_empty() {
                settings.default_platforms.clone()
            } else {
                platforms
            };

            let mut builder = ContentGenerator::builder()
                .topic(topic)
                .content_type(ContentType::parse_lenient(&content_type))
                .platforms(platforms)
                .tone(tone.unwrap_or(settings.default_tone));
            if let Some(cta) = cta {
                builder = builder.cta(cta);
            }
            if let Some(seed) = seed {
                builder = builder.seed(seed);
            }
            if llm {
                builder = if settings.api_key.trim().is_empty() {
                    builder.llm()
                } else {
                    let provider = OpenRouterProvider::with_api_key(
                        settings.api_key.clone(),
                        config.timeout(),
                    )?;
                    builder.with_provider(Box::new(provider))
                };
            }

            let package = builder.config(config).build().await?;
            print_package(&package);

            if save {
                for post in &package.posts {
                    let id = repo.save(post).await?;
                    println!("Saved {} post as #{}", post.platform, id);
                }
            }
        }

        Commands::History { platform, tone } => {
            let posts = filter_posts(repo.list_all().await?, platform, tone);
            if posts.is_empty() {
                println!("No saved posts.");
            }
            for post in &posts {
                print_saved(post);
            }
        }

        Commands::Delete { id } => {
            repo.delete(id).await?;
            println!("Deleted post #{}", id);
        }

        Commands::Settings { action } => match action {
            SettingsAction::Show => {
                let settings = repo.load_settings().await?;
                println!("Default tone: {}", settings.default_tone);
                println!("Default platforms: {}", join(&settings.default_platforms));
                println!(
                    "API key: {}",
                    if settings.api_key.is_empty() { "not set" } else { "set" }
                );
            }
            SettingsAction::Set {
                tone,
                platforms,
                api_key,
            } => {
                let mut settings = repo.load_settings().await?;
                if let Some(tone) = tone {
                    settings.default_tone = tone;
                }
                if !platforms.is_empty() {
                    settings.default_platforms = platforms;
                }
                if let Some(api_key) = api_key {
                    settings.api_key = api_key;
                }
                repo.save_settings(&settings).await?;
                info!("Settings saved");
                println!("Settings saved.");
            }
        },

        Commands::Stats => {
            let stats = UsageStats::from_posts(&repo.list_all().await?);
            println!("Total posts: {}", stats.total);
            println!("By platform:");
            for (platform, count) in &stats.by_platform {
                println!("  {}: {}", platform, count);
            }
            println!("By tone:");
            for (tone, count) in &stats.by_tone {
                println!("  {}: {}", tone, count);
            }
        }
    }

    Ok(())
}

fn print_package(package: &ContentPackage) {
    for post in &package.posts {
        println!(
            "== {} ({}/{} chars) ==",
            post.platform,
            post.text.chars().count(),
            post.platform.limit()
        );
        println!("{}", post.text);
        println!("{}\n", post.hashtags.join(" "));
    }

    println!("Enhanced hashtags: {}", package.enhanced_hashtags.join(" "));

    println!("\nImage ideas:");
    for idea in &package.image_ideas {
        println!("  - {}", idea);
    }
    for concept in &package.image_concepts {
        println!("  - {}", concept);
    }

    let summary = &package.summary;
    println!("\nCaption: {}", summary.caption);
    println!("Post idea: {}", summary.post_idea);
    println!("Hashtags: {}", summary.hashtags);
    println!("Visual: {}", summary.visual_suggestion);
}

fn print_saved(post: &ComposedPost) {
    println!(
        "#{} [{}] {} | {} | {}",
        post.id.unwrap_or_default(),
        post.created_at.format("%Y-%m-%d %H:%M"),
        post.platform,
        post.tone,
        post.content_type
    );
    println!("  {}", post.text);
    if !post.hashtags.is_empty() {
        println!("  {}", post.hashtags.join(" "));
    }
}

fn join(platforms: &[Platform]) -> String {
    platforms
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
