use clap::Parser;
use spell_catalog::catalog::{self, CatalogSummary, PipelineOptions};
use spell_catalog::{cli, config, error, export, rules};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("✖ {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Scan { root, output, sort_paths, dry_run } => {
            println!("📜 spell-catalog - カタログ生成\n");

            let root = config.resolve_root(root)?;
            let output = if dry_run {
                None
            } else {
                Some(config.resolve_output(output)?)
            };

            println!("[1/2] スキャン中: {}", root.display());
            let options = PipelineOptions {
                root,
                output,
                sort_paths,
                dry_run,
                verbose: cli.verbose,
                show_progress: !cli.quiet,
            };
            let run = catalog::run_pipeline(&options, &rules::DEFAULT_RULES)?;
            println!("✔ {}件を処理（除外 {}件）\n", run.records.len(), run.skipped);

            println!("[2/2] 結果を保存中...");
            match &run.written_to {
                Some(path) => println!("✔ 結果を保存: {}\n", path.display()),
                None => println!("- ドライランのため保存しません\n"),
            }

            run.summary().print();
        }

        Commands::Stats { input } => {
            let records = export::load_catalog(&input)?;
            CatalogSummary::from_records(&records).print();
        }

        Commands::Rules => {
            for line in rules::describe_rules(&rules::DEFAULT_RULES) {
                println!("{}", line);
            }
        }

        Commands::Config { set_root, set_output, show } => {
            let mut config = config;
            let changed = set_root.is_some() || set_output.is_some();

            if let Some(root) = set_root {
                config.scan_root = Some(root);
            }
            if let Some(output) = set_output {
                config.output = Some(output);
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                let display = |p: &Option<std::path::PathBuf>| {
                    p.as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".to_string())
                };
                println!("設定:");
                println!("  スキャンルート: {}", display(&config.scan_root));
                println!("  出力先: {}", display(&config.output));
            }
        }
    }

    Ok(())
}
