//! Site form submission handler
//!
//! One parameterized endpoint behind every form on the site. Normalizes
//! the posted fields, hands them to the hosted template-delivery service
//! and redirects to the thank-you page carrying the resolved item name.

use std::collections::HashMap;

use axum::{extract::State, response::Redirect, Form};

use crate::{
    domain::{
        delivery::TemplateDelivery,
        submissions::{record::SubmissionRecord, service::SubmissionDispatch},
    },
    infrastructure::http::{errors::ApiError, state::AppState},
};

/// Handle a form submission from any of the site's pages
pub async fn handler<D: SubmissionDispatch, W: TemplateDelivery>(
    State(state): State<AppState<D, W>>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Redirect, ApiError> {
    let delivery = state
        .delivery
        .clone()
        .ok_or_else(|| ApiError::new_503("Form delivery is not available right now"))?;

    let mut record = SubmissionRecord::from_fields(&fields)?;
    record.item_name = state.catalog.resolve_item_name(&record.item_name);

    delivery.deliver(&record).await?;

    Ok(Redirect::to(&format!(
        "/thank-you.html?item={}",
        urlencoding::encode(&record.item_name)
    )))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use testresult::TestResult;

    use crate::{
        domain::delivery::{DeliveryError, MockTemplateDelivery},
        infrastructure::http::{errors::ErrorResponse, router, state::test_state},
    };

    #[tokio::test]
    async fn test_successful_submit_redirects_to_thank_you_page() -> TestResult {
        let mut delivery = MockTemplateDelivery::new();

        delivery
            .expect_deliver()
            .times(1)
            .withf(|record| record.item_name == "General Inquiry")
            .returning(|_| Ok(()));

        let state = test_state(None, Some(delivery));

        let response = TestServer::new(router(state))?
            .post("/submit")
            .form(&[
                ("name", "A"),
                ("email", "a@x.com"),
                ("notes", "call me back"),
            ])
            .await;

        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);

        let location = response.header("location");
        assert_eq!(
            location.to_str()?,
            "/thank-you.html?item=General%20Inquiry"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_order_form_selection_is_carried_into_the_redirect() -> TestResult {
        let mut delivery = MockTemplateDelivery::new();

        delivery
            .expect_deliver()
            .times(1)
            .withf(|record| record.item_name == "Data Recovery")
            .returning(|_| Ok(()));

        let state = test_state(None, Some(delivery));

        let response = TestServer::new(router(state))?
            .post("/submit")
            .form(&[
                ("name", "A"),
                ("email", "a@x.com"),
                ("message", "hi"),
                ("form-item-name", "data-recovery"),
            ])
            .await;

        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);

        let location = response.header("location");
        assert_eq!(location.to_str()?, "/thank-you.html?item=Data%20Recovery");

        Ok(())
    }

    #[tokio::test]
    async fn test_unconfigured_delivery_is_visible_to_the_caller() -> TestResult {
        let state = test_state(None, None);

        let response = TestServer::new(router(state))?
            .post("/submit")
            .form(&[("name", "A"), ("email", "a@x.com"), ("message", "hi")])
            .await;

        let json = response.json::<ErrorResponse>();

        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json.error, "Form delivery is not available right now");

        Ok(())
    }

    #[tokio::test]
    async fn test_failed_delivery_surfaces_an_error_and_no_redirect() -> TestResult {
        let mut delivery = MockTemplateDelivery::new();

        delivery
            .expect_deliver()
            .times(1)
            .returning(|_| Err(DeliveryError::Rejected { status: 403 }));

        let state = test_state(None, Some(delivery));

        let response = TestServer::new(router(state))?
            .post("/submit")
            .form(&[("name", "A"), ("email", "a@x.com"), ("message", "hi")])
            .await;

        let json = response.json::<ErrorResponse>();

        assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(json.error, "Could not send transmission");

        Ok(())
    }
}
