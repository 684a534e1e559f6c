//! Upstream lookup modes and URL construction.

use url::Url;

/// A single OMDb query: search by title or fetch one title by IMDb id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Search(String),
    ById(String),
}

impl Lookup {
    /// OMDb query parameter selecting the mode.
    #[must_use]
    pub const fn mode(&self) -> &'static str {
        match self {
            Self::Search(_) => "s",
            Self::ById(_) => "i",
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Search(v) | Self::ById(v) => v,
        }
    }

    /// Build the upstream URL. Any query already present on `base` is kept;
    /// the mode pair and `apikey` are appended in that order.
    #[must_use]
    pub fn to_url(&self, base: &Url, api_key: &str) -> Url {
        let mut url = base.clone();
        url.query_pairs_mut()
            .append_pair(self.mode(), self.value())
            .append_pair("apikey", api_key);
        url
    }
}

/// Extract a non-empty `title` from a raw query string. The first
/// occurrence wins.
#[must_use]
pub fn title_param(raw_query: Option<&str>) -> Option<String> {
    let raw = raw_query?;
    url::form_urlencoded::parse(raw.as_bytes())
        .find(|(key, _)| key == "title")
        .map(|(_, value)| value.into_owned())
        .filter(|title| !title.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://www.omdbapi.com/").unwrap()
    }

    #[test]
    fn search_url_carries_title_and_key() {
        let url = Lookup::Search("Inception".into()).to_url(&base(), "k3y");
        assert_eq!(url.as_str(), "http://www.omdbapi.com/?s=Inception&apikey=k3y");
    }

    #[test]
    fn id_url_carries_id_and_key() {
        let url = Lookup::ById("tt1375666".into()).to_url(&base(), "k3y");
        assert_eq!(url.as_str(), "http://www.omdbapi.com/?i=tt1375666&apikey=k3y");
    }

    #[test]
    fn values_are_encoded_not_altered() {
        let url = Lookup::Search("The Good, the Bad & the Ugly".into()).to_url(&base(), "k");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("s".into(), "The Good, the Bad & the Ugly".into()),
                ("apikey".into(), "k".into()),
            ]
        );
    }

    #[test]
    fn existing_base_query_is_preserved() {
        let base = Url::parse("http://localhost:9000/omdb?type=movie").unwrap();
        let url = Lookup::ById("tt1".into()).to_url(&base, "k");
        assert_eq!(url.as_str(), "http://localhost:9000/omdb?type=movie&i=tt1&apikey=k");
    }

    #[test]
    fn missing_key_is_sent_empty() {
        let url = Lookup::ById("tt1".into()).to_url(&base(), "");
        assert_eq!(url.query(), Some("i=tt1&apikey="));
    }

    #[test]
    fn title_param_extracts_decoded_value() {
        assert_eq!(
            title_param(Some("title=Star%20Wars&year=1977")),
            Some("Star Wars".into())
        );
        assert_eq!(title_param(Some("title=a+b")), Some("a b".into()));
    }

    #[test]
    fn title_param_rejects_missing_or_empty() {
        assert_eq!(title_param(None), None);
        assert_eq!(title_param(Some("")), None);
        assert_eq!(title_param(Some("title=")), None);
        assert_eq!(title_param(Some("year=1999")), None);
    }

    #[test]
    fn first_title_wins() {
        assert_eq!(title_param(Some("title=Alien&title=Aliens")), Some("Alien".into()));
    }
}
