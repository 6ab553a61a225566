#[cfg(test)]
mod tests {
    use crate::Search::pubchem_api::PubChemClient;
    use crate::Search::text_search::run_text_search;
    use crate::Utils::http_client::MockHttpClient;
    use crate::render::{HtmlSurface, RecordingSink, RenderInstruction};
    use crate::settings::Settings;

    fn pug_url(name: &str) -> String {
        format!(
            "https://pubchem.ncbi.nlm.nih.gov/rest/pug/compound/name/{}/JSON",
            name
        )
    }

    const ETHANOL_JSON: &str = r#"{
        "PC_Compounds": [
            {
                "id": { "id": { "cid": 702 } },
                "props": [
                    { "urn": { "label": "Molecular Formula" }, "value": { "sval": "C2H6O" } },
                    { "urn": { "label": "IUPAC Name" }, "value": { "sval": "ethanol" } },
                    { "urn": { "label": "Molecular Weight" }, "value": { "sval": "46.07" } },
                    { "urn": { "label": "Boiling Point" }, "value": { "sval": "78.2 C" } }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_empty_query_renders_prompt_without_network() {
        // The mock panics on any request, so reaching the network fails the test
        let mock = MockHttpClient::new();
        let client = PubChemClient::with_client(&mock, Settings::new());
        let mut sink = RecordingSink::new();

        run_text_search("", &client, &mut sink);
        assert_eq!(sink.history, vec![RenderInstruction::Prompt]);
        assert_eq!(mock.call_count(), 0);
    }

    #[test]
    fn test_whitespace_query_renders_prompt_without_network() {
        let mock = MockHttpClient::new();
        let client = PubChemClient::with_client(&mock, Settings::new());
        let mut sink = RecordingSink::new();

        run_text_search("   \t ", &client, &mut sink);
        assert_eq!(sink.history, vec![RenderInstruction::Prompt]);
        assert_eq!(mock.call_count(), 0);
    }

    #[test]
    fn test_found_query_renders_status_then_compound() {
        let mut mock = MockHttpClient::new();
        mock.mock_response(&pug_url("ethanol"), 200, ETHANOL_JSON);
        let client = PubChemClient::with_client(&mock, Settings::new());
        let mut sink = RecordingSink::new();

        // surrounding whitespace is trimmed before the lookup
        run_text_search("  ethanol ", &client, &mut sink);

        assert_eq!(sink.history.len(), 2);
        assert_eq!(
            sink.history[0],
            RenderInstruction::InProgress("ethanol".to_string())
        );
        let RenderInstruction::Compound {
            record,
            matched_label,
        } = &sink.history[1]
        else {
            panic!("expected a compound render, got {:?}", sink.history[1]);
        };
        assert_eq!(record.display_name, "ethanol");
        assert_eq!(record.cid, 702);
        assert_eq!(*matched_label, None);
    }

    #[test]
    fn test_unmatched_query_renders_not_found() {
        let mut mock = MockHttpClient::new();
        mock.mock_response(&pug_url("unobtainium"), 200, r#"{ "PC_Compounds": [] }"#);
        let client = PubChemClient::with_client(&mock, Settings::new());
        let mut sink = RecordingSink::new();

        run_text_search("unobtainium", &client, &mut sink);
        assert_eq!(
            sink.last(),
            Some(&RenderInstruction::NotFound("unobtainium".to_string()))
        );
    }

    #[test]
    fn test_bad_status_renders_generic_error() {
        let mut mock = MockHttpClient::new();
        mock.mock_response(&pug_url("water"), 503, "maintenance");
        let client = PubChemClient::with_client(&mock, Settings::new());
        let mut sink = RecordingSink::new();

        run_text_search("water", &client, &mut sink);
        assert_eq!(sink.last(), Some(&RenderInstruction::GenericError));
    }

    #[test]
    fn test_network_failure_renders_generic_error() {
        let mut mock = MockHttpClient::new();
        mock.mock_failure(&pug_url("water"), "connection reset");
        let client = PubChemClient::with_client(&mock, Settings::new());
        let mut sink = RecordingSink::new();

        run_text_search("water", &client, &mut sink);
        assert_eq!(sink.last(), Some(&RenderInstruction::GenericError));
    }

    #[test]
    fn test_repeated_query_renders_identically() {
        let mut mock = MockHttpClient::new();
        mock.mock_response(&pug_url("ethanol"), 200, ETHANOL_JSON);
        let client = PubChemClient::with_client(&mock, Settings::new());
        let mut surface = HtmlSurface::new(Settings::new());

        run_text_search("ethanol", &client, &mut surface);
        let first = surface.current().to_string();
        run_text_search("ethanol", &client, &mut surface);

        assert_eq!(surface.current(), first);
        assert_eq!(mock.call_count(), 2);
    }
}
