use anyhow::Result;
use reqwest::Client;

/// All calls ride on the session cookie handed out by `login`, so the
/// client must be built with a cookie store.
pub fn http_client() -> Result<Client> {
    Ok(Client::builder().cookie_store(true).build()?)
}

pub mod client {
    use anyhow::Result;
    use reqwest::Client;
    use serde::{Deserialize, Serialize};
    use devlink_common::{
        BaseUrl, PendingRequest, PendingRequestsResponse, RequestId, ReviewStatus, UserSummary,
    };

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct LoginPayload<'a> {
        email_id: &'a str,
        password: &'a str,
    }

    #[derive(Deserialize)]
    struct DataEnvelope<T> {
        data: T,
    }

    pub async fn login(client: &Client, base: &BaseUrl, email: &str, password: &str) -> Result<()> {
        client
            .post(base.0.clone() + "/login")
            .json(&LoginPayload {
                email_id: email,
                password,
            })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn logout(client: &Client, base: &BaseUrl) -> Result<()> {
        client
            .post(base.0.clone() + "/logout")
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn get_profile(client: &Client, base: &BaseUrl) -> Result<UserSummary> {
        Ok(client
            .get(base.0.clone() + "/profile/view")
            .send()
            .await?
            .error_for_status()?
            .json::<_>()
            .await?)
    }

    pub async fn get_feed(client: &Client, base: &BaseUrl) -> Result<Vec<UserSummary>> {
        Ok(client
            .get(base.0.clone() + "/feed")
            .send()
            .await?
            .error_for_status()?
            .json::<DataEnvelope<Vec<UserSummary>>>()
            .await?
            .data)
    }

    pub async fn get_connections(client: &Client, base: &BaseUrl) -> Result<Vec<UserSummary>> {
        Ok(client
            .get(base.0.clone() + "/user/connections")
            .send()
            .await?
            .error_for_status()?
            .json::<DataEnvelope<Vec<UserSummary>>>()
            .await?
            .data)
    }

    pub async fn get_received_requests(
        client: &Client,
        base: &BaseUrl,
    ) -> Result<Vec<PendingRequest>> {
        Ok(client
            .get(base.0.clone() + "/user/requests/received")
            .send()
            .await?
            .error_for_status()?
            .json::<PendingRequestsResponse>()
            .await?
            .pending_requests)
    }

    /// Accept or reject a pending request. The response body is ignored,
    /// only the status matters.
    pub async fn review_request(
        client: &Client,
        base: &BaseUrl,
        status: ReviewStatus,
        id: &RequestId,
    ) -> Result<()> {
        client
            .post(review_url(base, status, id))
            .json(&serde_json::json!({}))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub(crate) fn review_url(base: &BaseUrl, status: ReviewStatus, id: &RequestId) -> String {
        base.0.clone() + "/request/review/" + status.as_str() + "/" + &id.0
    }
}

#[cfg(test)]
mod tests {
    use super::client::review_url;
    use devlink_common::{BaseUrl, RequestId, ReviewStatus};

    #[test]
    fn review_urls_carry_status_and_id() {
        let base = BaseUrl("http://localhost:7777".to_string());
        let id = RequestId("665a10cf".to_string());
        assert_eq!(
            review_url(&base, ReviewStatus::Accepted, &id),
            "http://localhost:7777/request/review/accepted/665a10cf"
        );
        assert_eq!(
            review_url(&base, ReviewStatus::Rejected, &id),
            "http://localhost:7777/request/review/rejected/665a10cf"
        );
    }
}
