use cartas::{browse, catalog, classify, cli, config, error, report, scanner, stats};
use cartas_common::ocr_quality::apply_corrections;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::path::{Path, PathBuf};

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// カタログから見たサイトルート（data/cartas.json → .）
fn site_root(catalog_path: &Path) -> PathBuf {
    catalog_path
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = Config::load()?;
    let catalog_path = config.resolve_catalog(cli.catalog.clone());
    log::debug!("カタログ: {}", catalog_path.display());

    match cli.command {
        Commands::List { filters, pages } => {
            let records = catalog::load_catalog(&catalog_path)?;
            let gallery = browse::build_gallery(records, &filters, config.page_size, config.default_sort);
            browse::run_list(gallery, pages, &config.site_base_url);
        }

        Commands::View { index, filters } => {
            let records = catalog::load_catalog(&catalog_path)?;
            let gallery = browse::build_gallery(records, &filters, config.page_size, config.default_sort);
            browse::run_view(gallery, index)?;
        }

        Commands::Options => {
            let records = catalog::load_catalog(&catalog_path)?;
            let gallery = cartas_common::Gallery::new(records);
            for line in browse::options_lines(&gallery) {
                println!("{}", line);
            }
        }

        Commands::Stats => {
            let records = catalog::load_catalog(&catalog_path)?;
            println!("📊 cartas - estatísticas\n");
            stats::CatalogStats::from_records(&records).print();
        }

        Commands::Classify { overwrite, output, dry_run } => {
            println!("🏷  cartas - classificação\n");

            println!("[1/2] Carregando catálogo...");
            let mut records = catalog::load_catalog(&catalog_path)?;
            println!("✔ {} cartas\n", records.len());

            println!("[2/2] Classificando...{}", if overwrite { " (sobrescrever)" } else { "" });
            let summary = classify::classify_catalog(&mut records, overwrite);
            println!("✔ {} cartas atualizadas", summary.changed);
            println!("  assuntos: {} / anos: {} / datas: {}", summary.subjects, summary.years, summary.dates);
            if summary.without_text > 0 {
                println!("  sem texto: {}", summary.without_text);
            }

            if dry_run {
                println!("\n(dry-run: nada foi salvo)");
            } else {
                let output = output.unwrap_or_else(|| catalog_path.clone());
                catalog::save_catalog(&output, &records)?;
                println!("\n✅ Salvo: {}", output.display());
            }
        }

        Commands::OcrReport { output, base_url } => {
            println!("📝 cartas - relatório de OCR\n");
            let records = catalog::load_catalog(&catalog_path)?;
            let output = output.unwrap_or_else(report::default_report_path);
            let base_url = base_url.unwrap_or_else(|| config.site_base_url.clone());

            let count = report::write_ocr_report(&records, &output, &base_url)?;
            println!("✔ {} de {} cartas com problemas de OCR", count, records.len());
            println!("\n✅ Relatório: {}", output.display());
        }

        Commands::ApplyCorrections { input, output } => {
            println!("✏️  cartas - aplicar correções\n");
            let mut records = catalog::load_catalog(&catalog_path)?;
            let corrections = report::read_corrections(&input)?;
            println!("✔ {} correções encontradas", corrections.len());

            let applied = apply_corrections(&mut records, &corrections);
            let unknown = corrections
                .iter()
                .filter(|c| !records.iter().any(|r| r.id == c.id))
                .count();
            if unknown > 0 {
                log::warn!("{} IDs não encontrados no catálogo", unknown);
            }

            let output = output.unwrap_or_else(|| catalog_path.clone());
            catalog::save_catalog(&output, &records)?;
            println!("✔ {} cartas atualizadas", applied);
            println!("\n✅ Salvo: {}", output.display());
        }

        Commands::Scan { folder, prune, dry_run } => {
            println!("📸 cartas - varredura de imagens\n");
            let folder = folder.unwrap_or_else(|| config.assets_dir.clone());

            println!("[1/3] Verificando imagens...");
            let scan = scanner::scan_folder(&folder, scanner::ScanOptions::default())?;
            println!(
                "✔ {} aceitas, {} rejeitadas, {} ignoradas\n",
                scan.accepted.len(),
                scan.rejected.len(),
                scan.ignored.len()
            );
            for (path, rejection) in &scan.rejected {
                println!("  - {} ({})", path.display(), rejection);
            }

            println!("[2/3] Atualizando catálogo...");
            let mut records = if catalog_path.exists() {
                catalog::load_catalog(&catalog_path)?
            } else {
                Vec::new()
            };
            let added = scanner::merge_into_catalog(&mut records, &scan.accepted, &site_root(&catalog_path));
            println!("✔ {} novas cartas (total {})\n", added, records.len());

            if dry_run {
                println!("(dry-run: nada foi salvo)");
                return Ok(());
            }

            catalog::save_catalog(&catalog_path, &records)?;

            if prune {
                println!("[3/3] Removendo imagens rejeitadas...");
                let removed = scanner::prune_rejected(&scan)?;
                println!("✔ {} removidas", removed);
            }

            println!("\n✅ Salvo: {}", catalog_path.display());
        }

        Commands::Config { set_catalog, set_language, set_base_url, show } => {
            let mut config = config;

            if let Some(path) = set_catalog {
                config.set_catalog(path)?;
                println!("✔ Catálogo definido");
            }

            if let Some(language) = set_language {
                config.set_language(language)?;
                println!("✔ Idioma: {} {}", language.flag(), language.name());
            }

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ URL do site definida");
            }

            if show {
                println!("Configuração ({}):", Config::config_path()?.display());
                println!("  catálogo: {}", config.catalog_path.display());
                println!("  catálogo em uso: {}", catalog_path.display());
                println!("  imagens: {}", config.assets_dir.display());
                println!("  itens por página: {}", config.page_size);
                println!("  ordenação: {}", config.default_sort.label());
                println!("  idioma: {} {}", config.language.flag(), config.language.name());
                println!("  URL do site: {}", config.site_base_url);
            }
        }
    }

    Ok(())
}
