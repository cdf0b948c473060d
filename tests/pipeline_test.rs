#[cfg(test)]
mod tests {
    use anyhow::Result;
    use serde_json::Value;
    use std::fs;
    use std::path::Path;
    use vod_sources::config::AppConfig;
    use vod_sources::output::base58;
    use vod_sources::pipeline;

    fn config_in(dir: &Path) -> AppConfig {
        AppConfig {
            source_file: dir.join("shipinywan.txt"),
            baseline_file: dir.join("basic.json"),
            filtered_text_file: dir.join("filtered_results.txt"),
            new_only_json_file: dir.join("video_sources.json"),
            combined_json_file: dir.join("combined_sources.json"),
            combined_base58_file: dir.join("combined_sources_base58.txt"),
            debug_log_file: dir.join("logs.txt"),
            ..AppConfig::default()
        }
    }

    fn read_json(path: &Path) -> Result<Value> {
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }

    #[tokio::test]
    async fn test_new_only_and_combined_outputs() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = config_in(dir.path());
        fs::write(&config.source_file, r#"{"name":"Alpha","api":"https://a.example.com/provide/vod/"}"#)?;
        fs::write(&config.baseline_file, r#"{"name":"Beta","api":"https://b.example.com/provide/vod"}"#)?;

        let summary = pipeline::run(&config).await?;
        assert_eq!(summary.new_only, 1);
        assert_eq!(summary.combined, 2);

        assert_eq!(
            fs::read_to_string(&config.filtered_text_file)?,
            "Alpha https://a.example.com/provide/vod\n"
        );

        let new_only = read_json(&config.new_only_json_file)?;
        assert_eq!(new_only["cache_time"], 9200);
        let site = new_only["api_site"].as_object().unwrap();
        assert_eq!(site.len(), 1);
        assert_eq!(site["api_1"]["name"], "Alpha");
        assert_eq!(site["api_1"]["api"], "https://a.example.com/provide/vod");
        assert_eq!(site["api_1"]["detail"], "https://a.example.com");

        // Baseline entries come first in the combined document
        let combined = read_json(&config.combined_json_file)?;
        assert_eq!(combined["api_site"]["api_1"]["name"], "Beta");
        assert_eq!(combined["api_site"]["api_2"]["name"], "Alpha");

        let compact = serde_json::to_string(&combined)?;
        assert_eq!(
            fs::read_to_string(&config.combined_base58_file)?,
            base58::encode_str(&compact)
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_text_source_with_duplicates_and_known_urls() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = config_in(dir.path());
        fs::write(
            &config.source_file,
            "\
站点列表
{\"key\": \"alpha\", \"name\": \"Alpha\", \"api\": \"https://a.example.com/provide/vod\"},
\"新资源\"
https://proxy.example.net/proxy/https://n.example.com/provide/vod/?ac=list
https://b.example.com/provide/vod
",
        )?;
        fs::write(
            &config.baseline_file,
            r#"{"api_site": {"b": {"name": "Beta", "api": "https://b.example.com/provide/vod", "detail": "https://b.example.com"}}}"#,
        )?;

        let summary = pipeline::run(&config).await?;
        assert_eq!(summary.baseline_unique, 1);
        assert_eq!(summary.source_unique, 3);
        assert!(summary.source_found > summary.source_unique);
        assert_eq!(summary.new_only, 2);

        let text = fs::read_to_string(&config.filtered_text_file)?;
        let urls: Vec<&str> = text.lines().filter_map(|l| l.rsplit(' ').next()).collect();
        assert_eq!(
            urls,
            vec!["https://a.example.com/provide/vod", "https://n.example.com/provide/vod"]
        );
        assert!(text.contains("站点列表 https://n.example.com/provide/vod"));
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_inputs_produce_empty_outputs() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = config_in(dir.path());

        let summary = pipeline::run(&config).await?;
        assert_eq!(summary.combined, 0);
        assert_eq!(fs::read_to_string(&config.filtered_text_file)?, "");

        let combined = read_json(&config.combined_json_file)?;
        assert!(combined["api_site"].as_object().unwrap().is_empty());
        Ok(())
    }
}
