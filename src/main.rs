use anyhow::Result;
use clap::Parser;
use tracing::error;
use wordscope::{
    analyze_text, report, utils, AnalysisConfig, Args, BundledLinguistics, CloudOptions,
    ResourceStore, WordCloud, EXAMPLE_TEXT,
};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);
    utils::validate_args(&args)?;

    if args.example {
        println!("{}", EXAMPLE_TEXT);
        return Ok(());
    }

    let store = ResourceStore::new(utils::resolve_data_dir(&args)?);

    if args.init {
        let outcome = store.bootstrap()?;
        for bundle in &outcome.installed {
            println!("Installed {} into {:?}", bundle.name(), store.path_of(*bundle));
        }
        for bundle in &outcome.present {
            println!("Already present: {}", bundle.name());
        }
        return Ok(());
    }

    let service = BundledLinguistics::initialize(&store)?;
    let text = utils::read_input(&args)?;
    let config = AnalysisConfig::default();

    match analyze_text(&text, &service, &config) {
        Ok(result) => {
            report::print_analysis_results(&result, args.format, config.language)?;
            if let Some(path) = &args.cloud {
                WordCloud::generate(&result.cloud_text(), &CloudOptions::default())
                    .write_svg(path)?;
            }
            Ok(())
        }
        Err(e) => {
            error!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
