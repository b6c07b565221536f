//! HTTP implementation of [`QuranApi`] over the public content API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use tracing::debug;

use super::types::*;
use super::{ApiError, ApiResult, QuranApi};
use crate::config::ApiConfig;
use crate::types::{ChapterMetadata, Verse};
use crate::verses::query::VerseQuery;

/// reqwest-backed API client
pub struct HttpQuranApi {
    config: ApiConfig,
    client: Client,
}

impl HttpQuranApi {
    /// Create a new API client
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn content_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn qna_url(&self, path: &str) -> String {
        format!("{}{}", self.config.qna_base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T, Q>(&self, url: &str, query: &Q) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        debug!(url = %url, "GET");
        let response = self.client.get(url).query(query).send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ApiResult<T> {
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(response.url().path().to_string()));
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Server {
                status,
                message: body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl QuranApi for HttpQuranApi {
    async fn get_chapter(
        &self,
        chapter_number: u16,
        locale: &str,
    ) -> ApiResult<Option<ChapterMetadata>> {
        let url = self.content_url(&format!("/chapters/{}", chapter_number));
        let body: ChapterResponse = self.get_json(&url, &[("language", locale)]).await?;
        Ok(body.chapter)
    }

    async fn get_verse(&self, verse_key: &str, query: &VerseQuery) -> ApiResult<Option<Verse>> {
        let url = self.content_url(&format!(
            "/verses/by_key/{}",
            urlencoding::encode(verse_key)
        ));
        let body: VerseResponse = self.get_json(&url, query).await?;
        Ok(body.verse)
    }

    async fn list_wbw_locales(&self, locale: &str) -> ApiResult<Vec<WbwLocale>> {
        let url = self.content_url("/resources/word_by_word_translations");
        let body: WbwLocalesResponse = self.get_json(&url, &[("language", locale)]).await?;
        Ok(body.word_by_word_translations)
    }

    async fn get_translations_info(&self, ids: &[u32]) -> ApiResult<Vec<TranslationInfo>> {
        let url = self.content_url("/resources/translations");
        let joined = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let body: TranslationsInfoResponse = self.get_json(&url, &[("ids", joined)]).await?;

        // The endpoint may answer with the full catalogue
        Ok(body
            .translations
            .into_iter()
            .filter(|info| ids.contains(&info.id))
            .collect())
    }

    async fn count_questions(
        &self,
        from_key: &str,
        to_key: &str,
        language: &str,
    ) -> ApiResult<QuestionCounts> {
        let url = self.qna_url("/questions/count-within-range");
        self.get_json(
            &url,
            &[("from", from_key), ("to", to_key), ("language", language)],
        )
        .await
    }

    async fn get_chapter_audio(
        &self,
        reciter_id: u32,
        chapter_number: u16,
    ) -> ApiResult<ChapterAudio> {
        let url = self.content_url(&format!("/audio/reciters/{}/audio_files", reciter_id));
        let chapter = chapter_number.to_string();
        let body: AudioFilesResponse = self
            .get_json(&url, &[("chapter", chapter.as_str()), ("segments", "true")])
            .await?;

        body.audio_files.into_iter().next().ok_or_else(|| {
            ApiError::NotFound(format!(
                "audio for reciter {} chapter {}",
                reciter_id, chapter_number
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_ignore_trailing_slash() {
        let api = HttpQuranApi::new(ApiConfig {
            base_url: "http://localhost:9000/api/".into(),
            qna_base_url: "http://localhost:9001".into(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            api.content_url("/chapters/1"),
            "http://localhost:9000/api/chapters/1"
        );
        assert_eq!(
            api.qna_url("/questions/count-within-range"),
            "http://localhost:9001/questions/count-within-range"
        );
    }
}
