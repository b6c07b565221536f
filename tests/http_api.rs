//! HTTP backend against a local mock server

use serde_json::json;
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ayah_widget::api::{ApiError, HttpQuranApi, QuranApi};
use ayah_widget::verses::VerseQueryBuilder;
use ayah_widget::{ApiConfig, WidgetRequest};

fn client(server: &MockServer) -> HttpQuranApi {
    HttpQuranApi::new(ApiConfig {
        base_url: format!("{}/api/qdc", server.uri()),
        qna_base_url: format!("{}/api/qna", server.uri()),
        timeout_secs: 5,
        ..Default::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_get_chapter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/qdc/chapters/1"))
        .and(query_param("language", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chapter": {
                "id": 1,
                "verses_count": 7,
                "name_simple": "Al-Fatihah",
                "name_arabic": "الفاتحة",
                "revelation_place": "makkah"
            }
        })))
        .mount(&server)
        .await;

    let chapter = client(&server).get_chapter(1, "en").await.unwrap().unwrap();
    assert_eq!(chapter.verses_count, 7);
    assert_eq!(chapter.name_simple, "Al-Fatihah");
}

#[tokio::test]
async fn test_missing_chapter_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/qdc/chapters/115"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client(&server).get_chapter(115, "en").await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn test_server_error_keeps_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/qdc/resources/word_by_word_translations"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    match client(&server).list_wbw_locales("ur").await {
        Err(ApiError::Server { status, message }) => {
            assert_eq!(status, 502);
            assert_eq!(message, "bad gateway");
        }
        other => panic!("expected server error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/qdc/chapters/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = client(&server).get_chapter(1, "en").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_get_verse_sends_query_bag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/api/qdc/verses/by_key/2(:|%3A)255$"))
        .and(query_param("translations", "131"))
        .and(query_param("words", "true"))
        .and(query_param("client_id", "partner-site"))
        .and(query_param("embed", "true"))
        .and(query_param("range_end", "257"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "verse": {
                "id": 262,
                "verse_number": 255,
                "verse_key": "2:255",
                "text_uthmani": "ٱللَّهُ لَآ إِلَـٰهَ إِلَّا هُوَ",
                "words": null,
                "translations": [
                    { "resource_id": 131, "text": "Allah! There is no god except Him" }
                ]
            }
        })))
        .mount(&server)
        .await;

    let mut request = WidgetRequest::new("2:255")
        .with_range_end(257)
        .with_translations([131]);
    request.tracking.client_id = Some("partner-site".to_string());
    let query = VerseQueryBuilder::for_request(&request, "en", "en");

    let verse = client(&server)
        .get_verse("2:255", &query)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(verse.verse_key, "2:255");
    assert!(verse.words.is_empty());
    assert_eq!(verse.translations.len(), 1);
    assert!(verse.translations[0].resource_name.is_none());
}

#[tokio::test]
async fn test_translations_info_filters_requested_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/qdc/resources/translations"))
        .and(query_param("ids", "131,20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "translations": [
                { "id": 131, "name": "The Clear Quran", "author_name": "Dr. Mustafa Khattab" },
                { "id": 20, "name": "Saheeh International", "author_name": "Saheeh International" },
                { "id": 85, "name": "Abdul Haleem", "author_name": "M.A.S. Abdel Haleem" }
            ]
        })))
        .mount(&server)
        .await;

    let infos = client(&server)
        .get_translations_info(&[131, 20])
        .await
        .unwrap();
    let ids: Vec<u32> = infos.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![131, 20]);
}

#[tokio::test]
async fn test_count_questions_uses_qna_base() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/qna/questions/count-within-range"))
        .and(query_param("from", "1:1"))
        .and(query_param("to", "1:1"))
        .and(query_param("language", "ar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "1:1": { "total": 3, "types": { "CLARIFICATION": 1, "TAFSIR": 2 } }
        })))
        .mount(&server)
        .await;

    let counts = client(&server)
        .count_questions("1:1", "1:1", "ar")
        .await
        .unwrap();
    assert_eq!(counts["1:1"].total, 3);
    assert_eq!(counts["1:1"].types["CLARIFICATION"], 1);
}

#[tokio::test]
async fn test_chapter_audio_takes_first_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/qdc/audio/reciters/7/audio_files"))
        .and(query_param("chapter", "1"))
        .and(query_param("segments", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "audio_files": [{
                "id": 1,
                "chapter_id": 1,
                "audio_url": "https://download.quranicaudio.com/qdc/mishari_al_afasy/murattal/1.mp3",
                "verse_timings": [
                    { "verse_key": "1:1", "timestamp_from": 0, "timestamp_to": 6493, "segments": [] }
                ]
            }]
        })))
        .mount(&server)
        .await;

    let audio = client(&server).get_chapter_audio(7, 1).await.unwrap();
    assert!(audio.audio_url.ends_with("/1.mp3"));
    assert_eq!(audio.timing("1:1").map(|t| t.timestamp_to), Some(6493));
}

#[tokio::test]
async fn test_chapter_audio_without_files_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/qdc/audio/reciters/7/audio_files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "audio_files": [] })))
        .mount(&server)
        .await;

    let err = client(&server).get_chapter_audio(7, 1).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}
