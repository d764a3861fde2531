use minicat::core::interfaces::BuildService;
use minicat::core::models::{AssetKind, BundleConfig, MinifyStrategy};
use minicat::core::naming;
use minicat::core::services::BundleService;
use minicat::infrastructure::{minifier_for, TokioFileSystemService};
use minicat::utils::MinicatError;
use std::path::Path;
use std::sync::Arc;

fn bundle_service(kind: AssetKind) -> BundleService {
    BundleService::new(Arc::new(TokioFileSystemService), minifier_for(kind))
}

fn write(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

#[tokio::test]
async fn test_css_bundle_sorted_and_minified() {
    let temp_dir = tempfile::tempdir().unwrap();
    let src = temp_dir.path().join("css");
    std::fs::create_dir(&src).unwrap();

    write(&src, "b.css", "div{margin: 0;}");
    write(&src, "a.css", "body{color:red;}");
    write(&src, "c.txt", "not css");
    std::fs::create_dir(src.join("nested.css")).unwrap();

    let service = bundle_service(AssetKind::Css);
    let files = service.matching_files(&src, AssetKind::Css).await.unwrap();
    assert_eq!(files, vec!["a.css", "b.css"]);

    let combined = service.concatenate(&src, &files).await.unwrap();
    assert_eq!(combined, b"body{color:red;}div{margin: 0;}");

    let output = temp_dir.path().join("public/bundle.css");
    let config = BundleConfig::new(AssetKind::Css, &src, &output);
    let result = service.build(&config).await.unwrap();

    assert_eq!(result.output_path, output);
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "body{color:red}div{margin:0}"
    );
}

#[tokio::test]
async fn test_rebuild_without_hash_is_identical() {
    let temp_dir = tempfile::tempdir().unwrap();
    let src = temp_dir.path();
    write(src, "one.css", ".a { color: blue; }\n");
    write(src, "two.css", ".b { padding: 1px 2px; }\n");

    let output = temp_dir.path().join("out/app.css");
    let config = BundleConfig::new(AssetKind::Css, src, &output);
    let service = bundle_service(AssetKind::Css);

    service.build(&config).await.unwrap();
    let first = std::fs::read(&output).unwrap();
    service.build(&config).await.unwrap();
    let second = std::fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_existing_output_is_replaced() {
    let temp_dir = tempfile::tempdir().unwrap();
    let src = temp_dir.path().join("css");
    std::fs::create_dir(&src).unwrap();
    write(&src, "a.css", "p { margin: 0; }");

    let output = temp_dir.path().join("bundle.css");
    std::fs::write(&output, "x".repeat(1024)).unwrap();

    let config = BundleConfig::new(AssetKind::Css, &src, &output);
    bundle_service(AssetKind::Css).build(&config).await.unwrap();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "p{margin:0}");
}

#[tokio::test]
async fn test_hashed_output_name() {
    let temp_dir = tempfile::tempdir().unwrap();
    let src = temp_dir.path().join("css");
    std::fs::create_dir(&src).unwrap();
    write(&src, "a.css", "body { color: red; }");

    let output = temp_dir.path().join("bundle.css");
    let config = BundleConfig::new(AssetKind::Css, &src, &output).with_hash(true);
    let service = bundle_service(AssetKind::Css);

    let result = service.build(&config).await.unwrap();
    let suffix = naming::hash_suffix(b"body{color:red}");

    assert_eq!(result.hash.as_deref(), Some(suffix.as_str()));
    assert_eq!(
        result.output_path,
        temp_dir.path().join(format!("bundle.{}.css", suffix))
    );
    assert!(result.output_path.exists());
    assert!(!output.exists());

    // Same content, same name
    let again = service.build(&config).await.unwrap();
    assert_eq!(again.output_path, result.output_path);

    // Any change in content moves the name
    write(&src, "a.css", "body { color: blue; }");
    let changed = service.build(&config).await.unwrap();
    assert_ne!(changed.output_path, result.output_path);
}

#[tokio::test]
async fn test_empty_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let src = temp_dir.path().join("empty");
    std::fs::create_dir(&src).unwrap();

    for kind in [AssetKind::Css, AssetKind::Js] {
        for strategy in [
            MinifyStrategy::ConcatenateThenMinify,
            MinifyStrategy::MinifyThenConcatenate,
        ] {
            let output = temp_dir.path().join(format!("out.{}", kind.extension()));
            let config = BundleConfig::new(kind, &src, &output).with_strategy(strategy);

            let result = bundle_service(kind).build(&config).await.unwrap();
            assert!(result.files.is_empty());
            assert!(std::fs::read_to_string(&output).unwrap().trim().is_empty());
        }
    }
}

#[tokio::test]
async fn test_js_strategies() {
    let temp_dir = tempfile::tempdir().unwrap();
    let src = temp_dir.path().join("js");
    std::fs::create_dir(&src).unwrap();
    write(&src, "01-util.js", "function double(value) {\n  return value * 2;\n}\n");
    write(&src, "02-main.js", "console.log(double(21));\n");
    write(&src, "readme.md", "# not javascript");

    let service = bundle_service(AssetKind::Js);

    let per_file = temp_dir.path().join("per-file.js");
    let config = BundleConfig::new(AssetKind::Js, &src, &per_file);
    let result = service.build(&config).await.unwrap();
    assert_eq!(result.files, vec!["01-util.js", "02-main.js"]);

    let whole = temp_dir.path().join("whole.js");
    let config = BundleConfig::new(AssetKind::Js, &src, &whole)
        .with_strategy(MinifyStrategy::ConcatenateThenMinify);
    service.build(&config).await.unwrap();

    for path in [&per_file, &whole] {
        let code = std::fs::read_to_string(path).unwrap();
        assert!(code.contains("double"));
        assert!(code.contains("console.log"));
        assert!(!code.contains("# not javascript"));
        assert!(code.len() < result.original_size);
    }
}

#[tokio::test]
async fn test_malformed_js_fails_without_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    let src = temp_dir.path().join("js");
    std::fs::create_dir(&src).unwrap();
    write(&src, "a.js", "var ok = 1;");
    write(&src, "b.js", "function (");

    let output = temp_dir.path().join("app.js");
    let config = BundleConfig::new(AssetKind::Js, &src, &output);
    let err = bundle_service(AssetKind::Js).build(&config).await.unwrap_err();

    assert!(matches!(err, MinicatError::Minify { .. }));
    assert!(err.format_detailed().contains("b.js"));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_missing_input_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = BundleConfig::new(
        AssetKind::Css,
        temp_dir.path().join("nope"),
        temp_dir.path().join("app.css"),
    );

    let err = bundle_service(AssetKind::Css).build(&config).await.unwrap_err();
    assert!(matches!(err, MinicatError::DirectoryRead { .. }));
    assert_eq!(err.stage(), "list");
}

#[tokio::test]
async fn test_output_directory_cannot_be_deleted() {
    let temp_dir = tempfile::tempdir().unwrap();
    let src = temp_dir.path().join("css");
    std::fs::create_dir(&src).unwrap();
    write(&src, "a.css", "a { color: red; }");

    let output = temp_dir.path().join("dir.css");
    std::fs::create_dir(&output).unwrap();

    let config = BundleConfig::new(AssetKind::Css, &src, &output);
    let err = bundle_service(AssetKind::Css).build(&config).await.unwrap_err();

    assert!(matches!(err, MinicatError::Delete { .. }));
    assert_eq!(err.stage(), "delete");
    assert!(output.is_dir());
}

#[tokio::test]
async fn test_output_parent_is_a_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let src = temp_dir.path().join("css");
    std::fs::create_dir(&src).unwrap();
    write(&src, "a.css", "a { color: red; }");

    let blocker = temp_dir.path().join("f");
    std::fs::write(&blocker, "plain file").unwrap();

    let output = blocker.join("o.css");
    let config = BundleConfig::new(AssetKind::Css, &src, &output);
    let err = bundle_service(AssetKind::Css).build(&config).await.unwrap_err();

    assert!(matches!(err, MinicatError::Write { .. }));
    assert_eq!(err.stage(), "write");
    assert_eq!(std::fs::read_to_string(&blocker).unwrap(), "plain file");
}

#[cfg(unix)]
#[tokio::test]
async fn test_unreadable_source_leaves_no_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    let src = temp_dir.path().join("s");
    std::fs::create_dir(&src).unwrap();
    write(&src, "a.css", "a { color: red; }");
    std::os::unix::fs::symlink(temp_dir.path().join("missing.css"), src.join("b.css")).unwrap();

    let service = bundle_service(AssetKind::Css);
    let files = service.matching_files(&src, AssetKind::Css).await.unwrap();
    assert_eq!(files, vec!["a.css", "b.css"]);

    for strategy in [
        MinifyStrategy::ConcatenateThenMinify,
        MinifyStrategy::MinifyThenConcatenate,
    ] {
        let output = temp_dir.path().join("bundle.css");
        let config = BundleConfig::new(AssetKind::Css, &src, &output).with_strategy(strategy);
        let err = service.build(&config).await.unwrap_err();

        match &err {
            MinicatError::FileRead { path, .. } => assert_eq!(path, &src.join("b.css")),
            other => panic!("expected a file read error, got {:?}", other),
        }
        assert_eq!(err.stage(), "concatenate");
        assert!(!output.exists());
    }
}
