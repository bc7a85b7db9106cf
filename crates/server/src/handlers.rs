use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use iris_dto::Greeting;
use iris_dto::PredictRequest;
use iris_dto::Prediction;
use iris_forest::Forest;

pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(Greeting {
        message: "Welcome to the Iris Classifier API".to_string(),
    })
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

/// Measurements are taken as-is: required floats, no range validation.
pub async fn predict(model: web::Data<Forest>, req: web::Json<PredictRequest>) -> impl Responder {
    match model.classify(<[f64; 4]>::from(*req)) {
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
        Ok(species) => HttpResponse::Ok().json(Prediction {
            prediction: species.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::App;
    use actix_web::dev::ServiceResponse;
    use actix_web::test;
    use iris_forest::ForestParams;
    use iris_forest::dataset;

    async fn request(req: test::TestRequest) -> ServiceResponse {
        let params = ForestParams {
            trees: 8,
            ..ForestParams::default()
        };
        let model = Forest::fit(params, &dataset::load()).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(model))
                .route("/", web::get().to(index))
                .route("/health", web::get().to(health))
                .route("/predict", web::post().to(predict)),
        )
        .await;
        test::call_service(&app, req.to_request()).await
    }

    #[actix_web::test]
    async fn greeting_is_static() {
        let resp = request(test::TestRequest::get().uri("/")).await;
        assert!(resp.status().is_success());
        let greeting: Greeting = test::read_body_json(resp).await;
        assert_eq!(greeting.message, "Welcome to the Iris Classifier API");
    }

    #[actix_web::test]
    async fn prediction_is_a_known_label() {
        let req = test::TestRequest::post().uri("/predict").set_json(PredictRequest {
            sepal_length: 5.1,
            sepal_width: 3.5,
            petal_length: 1.4,
            petal_width: 0.2,
        });
        let resp = request(req).await;
        assert!(resp.status().is_success());
        let body: Prediction = test::read_body_json(resp).await;
        assert_eq!(body.prediction, "setosa");
    }

    #[actix_web::test]
    async fn missing_field_is_a_client_error() {
        let req = test::TestRequest::post().uri("/predict").set_json(serde_json::json!({
            "sepal_length": 5.1,
            "sepal_width": 3.5,
            "petal_length": 1.4,
        }));
        let resp = request(req).await;
        assert!(resp.status().is_client_error());
    }

    #[actix_web::test]
    async fn wrong_typed_field_is_a_client_error() {
        let req = test::TestRequest::post().uri("/predict").set_json(serde_json::json!({
            "sepal_length": "long",
            "sepal_width": 3.5,
            "petal_length": 1.4,
            "petal_width": 0.2,
        }));
        let resp = request(req).await;
        assert!(resp.status().is_client_error());
    }

    #[actix_web::test]
    async fn impossible_measurements_are_accepted() {
        let req = test::TestRequest::post().uri("/predict").set_json(PredictRequest {
            sepal_length: -5.1,
            sepal_width: -3.5,
            petal_length: -1.4,
            petal_width: -0.2,
        });
        let resp = request(req).await;
        assert!(resp.status().is_success());
        let body: Prediction = test::read_body_json(resp).await;
        assert!(["setosa", "versicolor", "virginica"].contains(&body.prediction.as_str()));
    }
}
