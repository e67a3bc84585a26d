use crate::records::ApiResponse;
use crate::{Error, IndexConfig, Result, VoEventIndex};
use fpi2nite_types::{RawPacket, StreamFilter};
use reqwest::Url;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Blocking client for the voeventdb REST interface (`apiv1`)
pub struct VoeventDbClient {
    base_url: Url,
    http: Client,
}

impl VoeventDbClient {
    pub fn new(config: &IndexConfig) -> Result<Self> {
        let mut base_url = Url::parse(&config.base_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        // Url::join drops the last segment unless the base ends with a slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = Client::builder().user_agent(config.user_agent());
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }

        Ok(Self {
            base_url,
            http: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::InvalidUrl(format!("{}{}: {}", self.base_url, path, e)))
    }

    /// `packet/xml/<ivorn>` with the IVORN percent-encoded as one path segment
    pub fn packet_url(&self, ivorn: &str) -> Result<Url> {
        let mut url = self.endpoint("packet/xml/")?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| Error::InvalidUrl(format!("{} cannot be a base", self.base_url)))?;
            segments.pop_if_empty().push(ivorn);
        }
        Ok(url)
    }

    fn get_text(&self, url: Url, query: &[(&str, String)]) -> Result<String> {
        tracing::debug!(url = %url, "GET");
        let response = self.http.get(url.clone()).query(query).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text()?)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, filter: &StreamFilter) -> Result<T> {
        let url = self.endpoint(path)?;
        let body = self.get_text(url, &filter.query_pairs())?;
        let envelope: ApiResponse<T> = serde_json::from_str(&body)?;
        Ok(envelope.result)
    }
}

impl VoEventIndex for VoeventDbClient {
    fn list_ivorns(&self, filter: &StreamFilter) -> Result<Vec<String>> {
        let ivorns: Vec<String> = self.get_json("list/ivorn", filter)?;
        tracing::debug!(count = ivorns.len(), "listed ivorns");
        Ok(ivorns)
    }

    fn packet_xml(&self, ivorn: &str) -> Result<RawPacket> {
        let url = self.packet_url(ivorn)?;
        match self.get_text(url, &[]) {
            Ok(body) => Ok(RawPacket::new(body)),
            Err(Error::Status { status: 404, .. }) => Err(Error::UnknownIvorn(ivorn.to_string())),
            Err(err) => Err(err),
        }
    }

    fn count(&self, filter: &StreamFilter) -> Result<u64> {
        self.get_json("count", filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_BASE_URL;

    fn client(base_url: &str) -> VoeventDbClient {
        VoeventDbClient::new(&IndexConfig {
            base_url: base_url.to_string(),
            ..IndexConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_base_url_gains_trailing_slash() {
        let client = client("https://voeventdb.4pisky.org/apiv1");
        assert_eq!(client.base_url().as_str(), "https://voeventdb.4pisky.org/apiv1/");
        assert_eq!(
            client.endpoint("list/ivorn").unwrap().as_str(),
            "https://voeventdb.4pisky.org/apiv1/list/ivorn"
        );
    }

    #[test]
    fn test_packet_url_encodes_ivorn_as_one_segment() {
        let client = client(DEFAULT_BASE_URL);
        let url = client
            .packet_url("ivo://nasa.gsfc.gcn/SWIFT#BAT_GRB_Pos_1060430-259")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://voeventdb.4pisky.org/apiv1/packet/xml/ivo:%2F%2Fnasa.gsfc.gcn%2FSWIFT%23BAT_GRB_Pos_1060430-259"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = VoeventDbClient::new(&IndexConfig {
            base_url: "not a url".to_string(),
            ..IndexConfig::default()
        });
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }
}
