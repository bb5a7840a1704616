// Integration tests for Orbitrum Match

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    test as actix_test, web, App,
};
use orbitrum_match::config::MatchingSettings;
use orbitrum_match::core::Matcher;
use orbitrum_match::models::{
    ClientRequest, CommunicationStyle, ExperienceLevel, Location, ProfessionalProfile,
    ServiceArea, Urgency, WorkMethodology, WorkMode,
};
use orbitrum_match::routes::{self, matches::AppState};
use serde_json::{json, Value};

fn test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = AppState {
        matcher: Matcher::default(),
        matching: MatchingSettings::default(),
    };

    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::JsonConfig::default().error_handler(routes::handle_json_payload_error))
        .configure(routes::configure_routes)
}

fn create_professional(id: &str, rating: f64, lat: f64, lon: f64) -> ProfessionalProfile {
    ProfessionalProfile {
        id: id.to_string(),
        name: format!("Profissional {}", id),
        title: "Eletricista".to_string(),
        skills: vec!["eletricista".to_string(), "instalação".to_string()],
        specializations: vec!["residencial".to_string()],
        experience_years: 5.0,
        rating,
        completed_projects: 15,
        response_time_hours: 3.0,
        available: true,
        work_preferences: vec![WorkMode::Onsite, WorkMode::Hybrid],
        communication_style: CommunicationStyle::Formal,
        work_methodology: WorkMethodology::Agile,
        location: Some(ServiceArea {
            latitude: lat,
            longitude: lon,
            city: None,
            state: None,
            work_radius_km: 25.0,
        }),
    }
}

fn create_client() -> ClientRequest {
    ClientRequest {
        project_type: "eletricista residencial".to_string(),
        budget: 400.0,
        urgency: Urgency::Urgent,
        work_preference: WorkMode::Onsite,
        communication_style: CommunicationStyle::Formal,
        experience_required: ExperienceLevel::Mid,
        location: Some(Location {
            latitude: -23.5505, // São Paulo
            longitude: -46.6333,
            city: Some("São Paulo".to_string()),
            state: Some("SP".to_string()),
        }),
    }
}

#[test]
fn test_integration_end_to_end_ranking() {
    let matcher = Matcher::with_default_rules();
    let client = create_client();

    let candidates = vec![
        create_professional("1", 4.9, -23.56, -46.64),   // Nearby, top rated
        create_professional("2", 4.2, -23.56, -46.64),   // Nearby
        create_professional("3", 4.9, -22.9068, -43.1729), // Rio, far away
        create_professional("4", 3.0, -23.56, -46.64),   // Nearby, low rating
        create_professional("5", 4.9, -23.56, -46.64),   // Ties with 1
    ];

    let result = matcher.rank(&client, &candidates, 4);

    assert_eq!(result.total_candidates, 5);
    assert_eq!(result.matches.len(), 4);

    let ids: Vec<&str> = result.matches.iter().map(|m| m.profile.id.as_str()).collect();
    assert_eq!(&ids[..2], &["1", "5"], "Ties must keep input order");

    for pair in result.matches.windows(2) {
        assert!(pair[0].ai_match_score >= pair[1].ai_match_score, "Matches not sorted by score");
    }

    for m in &result.matches {
        assert!((0.0..=100.0).contains(&m.ai_match_score));
        let explanation = matcher.explain(&client, m);
        assert!(!explanation.is_empty());
    }
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = actix_test::init_service(test_app()).await;
    let req = actix_test::TestRequest::get().uri("/api/v1/health").to_request();
    let resp: Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp["status"], "healthy");
}

#[actix_web::test]
async fn test_rank_endpoint_with_explanations() {
    let app = actix_test::init_service(test_app()).await;

    let professionals = vec![
        create_professional("a", 3.8, -23.56, -46.64),
        create_professional("b", 4.9, -23.56, -46.64),
    ];

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(json!({
            "client": create_client(),
            "professionals": professionals,
            "limit": 6,
            "explain": true
        }))
        .to_request();

    let resp = actix_test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = actix_test::read_body_json(resp).await;
    let matches = body["matches"].as_array().unwrap();

    assert_eq!(matches.len(), 2);
    assert_eq!(body["totalCandidates"], 2);
    assert_eq!(matches[0]["id"], "b");
    let top = matches[0]["aiMatchScore"].as_f64().unwrap();
    assert!(top >= matches[1]["aiMatchScore"].as_f64().unwrap());
    assert!(matches[0]["breakdown"]["technical"].is_number());
    assert!(matches[0]["explanation"].as_str().unwrap().starts_with("Recomendado porque"));
    assert!(body["requestId"].is_string());
}

#[actix_web::test]
async fn test_rank_endpoint_negative_limit_returns_empty() {
    let app = actix_test::init_service(test_app()).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(json!({
            "client": create_client(),
            "professionals": vec![create_professional("a", 4.0, -23.56, -46.64)],
            "limit": -1
        }))
        .to_request();

    let body: Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["matches"].as_array().unwrap().len(), 0);
    assert_eq!(body["limit"], 0);
    assert_eq!(body["totalCandidates"], 1);
}

#[actix_web::test]
async fn test_rank_endpoint_rejects_unknown_enum() {
    let app = actix_test::init_service(test_app()).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(json!({
            "client": {
                "projectType": "pintura",
                "workPreference": "teletransporte",
                "communicationStyle": "formal",
                "experienceRequired": "mid"
            },
            "professionals": []
        }))
        .to_request();

    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
}

#[actix_web::test]
async fn test_rank_endpoint_rejects_out_of_range_rating() {
    let app = actix_test::init_service(test_app()).await;

    let mut professional = create_professional("a", 4.0, -23.56, -46.64);
    professional.rating = 7.0;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(json!({
            "client": create_client(),
            "professionals": [professional]
        }))
        .to_request();

    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["error"], "Validation failed");
}

#[actix_web::test]
async fn test_explain_endpoint() {
    let app = actix_test::init_service(test_app()).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/matches/explain")
        .set_json(json!({
            "client": create_client(),
            "professional": create_professional("x", 4.7, -23.56, -46.64)
        }))
        .to_request();

    let body: Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["professionalId"], "x");
    let score = body["aiMatchScore"].as_f64().unwrap();
    assert!(score > 0.0 && score <= 100.0);
    assert!(body["explanation"].as_str().unwrap().contains("avaliação excelente"));
}

#[actix_web::test]
async fn test_explain_endpoint_rejects_blank_skill() {
    let app = actix_test::init_service(test_app()).await;

    let mut professional = create_professional("x", 4.7, -23.56, -46.64);
    professional.skills.push("   ".to_string());

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/matches/explain")
        .set_json(json!({
            "client": create_client(),
            "professional": professional
        }))
        .to_request();

    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["message"], "Blank text in skills");
}
