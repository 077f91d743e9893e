use super::AnalysisReport;
use crate::errors::Result;
use crate::io::FileSystem;
use std::path::Path;

/// Pretty-printed artifact text (two-space indentation).
pub fn render_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Serialise first, then write, so a serialisation failure leaves no file.
pub fn write_report<F: FileSystem>(report: &AnalysisReport, path: &Path, fs: &F) -> Result<()> {
    let json = render_json(report)?;
    fs.write(path, &json)?;
    tracing::info!(path = %path.display(), "Wrote analysis report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::analyze_content;
    use crate::complexity::ComplexityClassifier;
    use crate::io::RealFileSystem;
    use crate::registry::Registry;
    use serde_json::Value;
    use std::fs;
    use tempfile::TempDir;

    fn sample_report() -> AnalysisReport {
        let mut registry = Registry::new();
        registry.record_file(analyze_content(
            "widgets/card.js",
            "app.component('card', { template: '<div ng-if=\"x\"></div>' });\nCard.$inject = ['$http']",
        ));
        registry.record_file(analyze_content("svc.js", "app.service('api', Api);"));
        AnalysisReport::from_registry(&registry, &ComplexityClassifier::default())
    }

    #[test]
    fn test_top_level_key_order() {
        let json = render_json(&sample_report()).unwrap();
        let keys = [
            "\"summary\"",
            "\"components\"",
            "\"directives\"",
            "\"controllers\"",
            "\"services\"",
            "\"factories\"",
            "\"dependencies\"",
            "\"templateStats\"",
        ];
        let positions: Vec<_> = keys
            .iter()
            .map(|k| json.find(&format!("\n  {k}")).expect(k))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_dependencies_render_as_object() {
        let value: Value = serde_json::from_str(&render_json(&sample_report()).unwrap()).unwrap();
        let deps = value["dependencies"].as_object().unwrap();
        assert_eq!(deps["card"], serde_json::json!(["$http"]));
        assert_eq!(deps["api"], serde_json::json!([]));
        assert_eq!(value["summary"]["totalComponents"], 1);
        assert_eq!(value["summary"]["complexityMetrics"]["lowComplexity"], 1);
        assert_eq!(value["templateStats"]["withDirectives"], 1);
        assert_eq!(value["components"][0]["path"], "widgets/card.js");
    }

    #[test]
    fn test_write_report_round_trips() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out").join("component-analysis.json");
        let report = sample_report();

        write_report(&report, &path, &RealFileSystem).unwrap();

        let parsed: AnalysisReport =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, report);
    }
}
