use clap::Parser;
use freshtech::{cli, client, config, error, loader, report};
use cli::{Cli, Commands};
use client::HttpBackend;
use config::Config;
use error::Result;
use freshtech_common::{ExtractionState, FreshAnalyzerState};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("✖ {}", e);
        std::process::exit(e.exit_code());
    }
}

fn init_logger(verbose: bool) {
    // RUST_LOG が設定されていればそちらを優先
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

fn print_saved(saved: Option<report::SavedImage>) {
    match saved {
        Some(saved) => {
            println!("✔ 保存: {} ({}x{})", saved.path.display(), saved.width, saved.height)
        }
        None => println!("⚠ 注釈付き画像はデコードできないため保存しませんでした"),
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Freshness { image, output } => {
            println!("🍎 freshtech - 鮮度解析\n");

            let backend_url = config.resolve_backend_url(cli.backend_url.as_deref())?;
            let backend = HttpBackend::from_config(&config, backend_url)?;

            // 1. 画像読み込み
            println!("[1/3] 画像を読み込み中...");
            let mut state = FreshAnalyzerState::new();
            state.select_image(loader::load_image(&image)?);
            println!("✔ {}\n", image.display());

            // 2. 解析
            println!("[2/3] 解析中... ({})", backend.base_url());
            let bar = spinner("Analyzing...");
            let outcome = state.analyze(&backend).await;
            bar.finish_and_clear();
            outcome?;
            println!("✔ 解析完了\n");

            println!("{}", report::render_fresh(&state.presentation()));

            // 3. 注釈付き画像を保存
            if let Some(analysis) = state.analysis() {
                println!("[3/3] 注釈付き画像を保存中...");
                print_saved(report::save_annotated_image_or_skip(
                    &analysis.image,
                    output,
                    "freshness",
                )?);
            }

            println!("\n✅ 完了");
        }

        Commands::Extract { front, back, side, output, json } => {
            println!("📦 freshtech - 商品情報抽出\n");

            let backend_url = config.resolve_backend_url(cli.backend_url.as_deref())?;
            let backend = HttpBackend::from_config(&config, backend_url)?;

            // 1. 画像読み込み
            println!("[1/3] 画像を読み込み中...");
            let slots = loader::load_slots(front.as_deref(), back.as_deref(), side.as_deref())?;
            for (label, file) in slots.filled() {
                println!("  {}: {} ({} bytes)", label, file.file_name, file.len());
            }
            let mut state = ExtractionState::with_slots(slots);
            println!();

            // 2. 検出・抽出を並列に送信
            println!("[2/3] 文字検出・抽出中... ({})", backend.base_url());
            let bar = spinner("Processing...");
            let outcome = state.submit(&backend).await;
            bar.finish_and_clear();
            outcome?;
            println!("✔ 処理完了\n");

            if let Some(result) = state.result() {
                if json {
                    println!("{}", serde_json::to_string_pretty(&result.item_information.to_json())?);
                } else {
                    println!("{}", report::render_product(&state.presentation()));
                }

                // 3. 注釈付き画像を保存
                println!("[3/3] 注釈付き画像を保存中...");
                print_saved(report::save_annotated_image_or_skip(
                    &result.image,
                    output,
                    "product",
                )?);
            }

            println!("\n✅ 完了");
        }

        Commands::Config { set_backend_url, set_timeout, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(url) = set_backend_url {
                config.set_backend_url(url)?;
                changed = true;
                println!("✔ バックエンドURLを設定しました");
            }

            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
                changed = true;
                println!("✔ タイムアウトを設定しました");
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  バックエンドURL: {}", config.backend_url);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  設定ファイル: {}", Config::config_path()?.display());
                if let Ok(url) = std::env::var(config::BACKEND_URL_ENV) {
                    println!("  環境変数 {}: {}", config::BACKEND_URL_ENV, url);
                }
            }
        }
    }

    Ok(())
}
