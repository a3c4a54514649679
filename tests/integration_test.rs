use pmc_scrubber::config::Config;
use pmc_scrubber::logger;
use pmc_scrubber::orchestrator::App;
use std::fs;
use std::path::{Path, PathBuf};

const SAMPLE_ARTICLE: &str = "==== front\nCopyright 2020, licensed and credited.\nTitle Here.\n==== body\nResults [1] show growth (Doe, 2021). Acknowledgements: none.\n==== refs\nDoe 2021.";

/// 日志文件都放进临时目录，避免写到工作目录
fn test_config(root: &Path) -> Config {
    Config {
        output_log_file: root.join("scrub_log.txt").to_string_lossy().to_string(),
        failure_log_file: root.join("failed.txt").to_string_lossy().to_string(),
        ..Default::default()
    }
}

/// 创建 语料/子目录/文章 结构，返回语料目录
fn build_corpus(root: &Path, articles: &[(&str, &str, &[u8])]) -> PathBuf {
    let corpus = root.join("PMC000");
    for (folder, name, content) in articles {
        let dir = corpus.join(folder);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }
    corpus
}

#[tokio::test]
async fn test_scrub_sample_article() {
    logger::init();

    let tmp = tempfile::tempdir().unwrap();
    let corpus = build_corpus(tmp.path(), &[("PMC001", "PMC1.txt", SAMPLE_ARTICLE.as_bytes())]);

    let app = App::initialize(test_config(tmp.path())).unwrap();
    let summary = app.scrub_corpus(&corpus).await.unwrap();
    assert_eq!(summary.success, 1);
    assert_eq!(summary.failed, 0);

    let output = fs::read_to_string(tmp.path().join("PMC000_preprocessed/PMC1.txt")).unwrap();

    // front 只保留 credited 之后的标题，body 在致谢之前截断
    assert!(output.starts_with("Title Here.\n"));
    assert!(output.contains("Results show growth"));
    assert!(!output.contains("Copyright"));
    assert!(!output.contains("Acknowledgements"));
    assert!(!output.contains("[1]"));
    assert!(!output.contains("Doe"));
    assert_eq!(output, "Title Here.\n\n body\nResults show growth . ");
}

#[tokio::test]
async fn test_corpus_isolates_unreadable_file() {
    logger::init();

    let tmp = tempfile::tempdir().unwrap();
    let corpus = build_corpus(
        tmp.path(),
        &[
            ("PMC001", "PMC1.txt", SAMPLE_ARTICLE.as_bytes()),
            ("PMC001", "PMC2.txt", &[0xffu8, 0xfe, 0xfd][..]),
            ("PMC002", "PMC3.txt", &b"No separators here (Smith, 2019) [4]."[..]),
        ],
    );

    let config = test_config(tmp.path());
    let failure_log = config.failure_log_file.clone();
    let run_log = config.output_log_file.clone();
    let app = App::initialize(config).unwrap();

    let summary = app.scrub_corpus(&corpus).await.unwrap();
    assert_eq!(summary.success, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.total(), 3);

    let out_dir = tmp.path().join("PMC000_preprocessed");
    assert!(out_dir.join("PMC1.txt").is_file());
    assert!(!out_dir.join("PMC2.txt").exists());
    assert_eq!(
        fs::read_to_string(out_dir.join("PMC3.txt")).unwrap(),
        "\nNo separators here ."
    );

    let failures = fs::read_to_string(failure_log).unwrap();
    assert_eq!(failures.lines().count(), 1);
    assert!(failures.contains("PMC2.txt"));

    let log = fs::read_to_string(run_log).unwrap();
    assert!(log.contains("成功: 2"));
    assert!(log.contains("失败: 1"));
}

#[tokio::test]
async fn test_concurrent_run_matches_sequential() {
    let tmp = tempfile::tempdir().unwrap();
    let articles: Vec<(String, Vec<u8>)> = (0..8)
        .map(|i| (format!("PMC{}.txt", i), SAMPLE_ARTICLE.as_bytes().to_vec()))
        .collect();
    let refs: Vec<(&str, &str, &[u8])> = articles
        .iter()
        .map(|(name, content)| ("PMC001", name.as_str(), content.as_slice()))
        .collect();
    let corpus = build_corpus(tmp.path(), &refs);

    let config = Config {
        max_concurrent_files: 4,
        ..test_config(tmp.path())
    };
    let app = App::initialize(config).unwrap();
    let summary = app.scrub_corpus(&corpus).await.unwrap();
    assert_eq!(summary.success, 8);
    assert_eq!(summary.failed, 0);

    let out_dir = tmp.path().join("PMC000_preprocessed");
    for (name, _) in &articles {
        assert_eq!(
            fs::read_to_string(out_dir.join(name)).unwrap(),
            "Title Here.\n\n body\nResults show growth . "
        );
    }
}

#[tokio::test]
async fn test_rerun_overwrites_and_keeps_output_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let corpus = build_corpus(tmp.path(), &[("PMC001", "PMC1.txt", SAMPLE_ARTICLE.as_bytes())]);
    let app = App::initialize(test_config(tmp.path())).unwrap();

    let first = app.scrub_corpus(&corpus).await.unwrap();
    let out_file = tmp.path().join("PMC000_preprocessed/PMC1.txt");
    let first_output = fs::read_to_string(&out_file).unwrap();

    let second = app.scrub_corpus(&corpus).await.unwrap();
    assert_eq!(first.success, 1);
    assert_eq!(second.success, 1);
    assert_eq!(fs::read_to_string(&out_file).unwrap(), first_output);

    // 输出目录里只有结果文件，没有残留的临时文件
    let entries: Vec<_> = fs::read_dir(tmp.path().join("PMC000_preprocessed"))
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn test_scrub_file_default_output_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let corpus = build_corpus(tmp.path(), &[("PMC001", "PMC9.txt", &b"Plain body text!!"[..])]);
    let source = corpus.join("PMC001/PMC9.txt");

    let app = App::initialize(test_config(tmp.path())).unwrap();
    let outcome = app.scrub_file(&source, None).await.unwrap();

    assert!(outcome.fallback);
    // 去掉 子目录/文件 两段后落在语料目录里
    assert_eq!(outcome.output_path, corpus.join("preprocessed/PMC9.txt"));
    assert_eq!(
        fs::read_to_string(&outcome.output_path).unwrap(),
        "\nPlain body text."
    );
}

#[tokio::test]
async fn test_missing_corpus_is_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let app = App::initialize(test_config(tmp.path())).unwrap();
    let result = app.scrub_corpus(&tmp.path().join("does_not_exist")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_toml_config_stopstrings() {
    let tmp = tempfile::tempdir().unwrap();
    let config_path = tmp.path().join("scrubber.toml");
    fs::write(
        &config_path,
        format!(
            "separator = \"####\"\nstopstrings_body = [\"References\"]\noutput_log_file = {:?}\nfailure_log_file = {:?}\n",
            tmp.path().join("log.txt").to_string_lossy(),
            tmp.path().join("failed.txt").to_string_lossy(),
        ),
    )
    .unwrap();
    let config = Config::from_toml_file(&config_path).unwrap();
    assert_eq!(config.stopstrings_body, vec!["References".to_string()]);

    let corpus = build_corpus(
        tmp.path(),
        &[(
            "PMC001",
            "PMC1.txt",
            &b"#### head\ncited. Intro\n#### body\nMain text. REFERENCES 1. x\n#### tail"[..],
        )],
    );
    let app = App::initialize(config).unwrap();
    app.scrub_corpus(&corpus).await.unwrap();

    assert_eq!(
        fs::read_to_string(tmp.path().join("PMC000_preprocessed/PMC1.txt")).unwrap(),
        "Intro\n\n body\nMain text. "
    );
}
