use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("credence")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Credence Contributors")
        .about("Summarize articles and estimate their credibility")
        .arg(clap::arg!(<INPUT> "URL to fetch, HTML or text file, or '-' for stdin"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (text, json, markdown, toml)")
                .value_name("FORMAT")
                .default_value("text")
                .value_parser(["text", "json", "markdown", "toml"]),
        )
        .arg(clap::arg!(--html "Treat file or stdin input as HTML and extract the article first"))
        .arg(clap::arg!(--"summary-only" "Only output the summary"))
        .arg(clap::arg!(--"credibility-only" "Only output the credibility score and factors"))
        .arg(
            clap::arg!(--strategy <STRATEGY> "Summarization strategy")
                .default_value("frequency")
                .value_parser(["frequency", "lead"]),
        )
        .arg(clap::arg!(--ratio <RATIO> "Share of sentences kept by the frequency strategy").default_value("0.25"))
        .arg(clap::arg!(--"min-sentences" <NUM> "Minimum number of summary sentences").default_value("3"))
        .arg(clap::arg!(--"max-sentences" <NUM> "Maximum number of summary sentences").default_value("7"))
        .arg(clap::arg!(--"lead-sentences" <NUM> "Sentences kept by the lead strategy").default_value("5"))
        .arg(clap::arg!(--width <COLS> "Wrap text output at this width (0 = no wrapping)").default_value("0"))
        .arg(clap::arg!(--"include-source" "Include the analyzed text in JSON output"))
        .arg(clap::arg!(--compact "Compact JSON output"))
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("10"))
        .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(
            clap::arg!(--completions <SHELL> "Print a shell completion script and exit")
                .value_name("SHELL")
                .value_parser(["bash", "zsh", "fish", "powershell"]),
        )
        .arg(clap::arg!(-v --verbose "Show progress and timing on stderr"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "credence", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "credence", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "credence", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "credence", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
