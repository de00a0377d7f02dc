use franchise::{model::api::HealthDto, server::controller::health::health};

use super::*;

/// Expect 200 with status ok and the state's version
#[tokio::test]
async fn reports_ok_and_version() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = health(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: HealthDto = json_body(resp).await;
    assert_eq!(body.status, "ok");
    assert_eq!(body.version, "test");

    Ok(())
}
