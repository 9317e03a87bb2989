//! Release notice text

use crate::config::ChangesConfig;

/// Subject and body announcing a new ontology release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNotice {
    pub subject: String,
    pub body: String,
}

impl ReleaseNotice {
    pub fn new(config: &ChangesConfig, date: &str) -> Self {
        let label = &config.ontology_label;
        let subject = format!("{} New Release ({})", label, date);
        let body = format!(
            "Dear Subscriber,\n\n\
             {label} has published a new release on {date}:\n\
             - {label} ontology can be downloaded at {ontology}\n\
             - Changes in this release are available in both TSV format: {tsv} \
             and JSON format: {json}\n\n\
             The {label} Consortium",
            label = label,
            date = date,
            ontology = config.ontology_url,
            tsv = config.public_url(&config.latest_tsv_key),
            json = config.public_url(&config.latest_json_key),
        );
        Self { subject, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_links_reports() {
        let notice = ReleaseNotice::new(&ChangesConfig::default(), "2024-01-17");
        assert_eq!(notice.subject, "GO New Release (2024-01-17)");
        assert!(notice.body.contains("published a new release on 2024-01-17"));
        assert!(notice.body.contains("http://purl.obolibrary.org/obo/go.obo"));
        assert!(
            notice
                .body
                .contains("https://s3.amazonaws.com/geneontology-public/go-last-changes.tsv")
        );
        assert!(
            notice
                .body
                .contains("https://s3.amazonaws.com/geneontology-public/go-last-changes.json")
        );
    }
}
