use crate::{
    AUTH_ME_PATH, CAMPAIGNS_PATH, Campaign, CampaignDraft, DeleteConfirmation, User,
};
use serde::{Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest {
    /// JSON body sent with the request (use `()` for body-less requests).
    type Body: Serialize;
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;

    /// The URL path relative to the API base URL.
    fn path(&self) -> String;

    fn body(&self) -> Option<&Self::Body> {
        None
    }
}

fn campaign_path(id: i64) -> String {
    format!("{}{}", CAMPAIGNS_PATH, id)
}

// =========================================================
// Request Definitions
// =========================================================

/// Look up the user owning the current bearer token
#[derive(Debug, Clone, Copy)]
pub struct CurrentUserRequest;

impl ApiRequest for CurrentUserRequest {
    type Body = ();
    type Response = User;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        AUTH_ME_PATH.to_string()
    }
}

/// List all campaigns
#[derive(Debug, Clone, Copy)]
pub struct ListCampaignsRequest;

impl ApiRequest for ListCampaignsRequest {
    type Body = ();
    type Response = Vec<Campaign>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        CAMPAIGNS_PATH.to_string()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GetCampaignRequest {
    pub id: i64,
}

impl ApiRequest for GetCampaignRequest {
    type Body = ();
    type Response = Campaign;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        campaign_path(self.id)
    }
}

/// Create a campaign. The backend schema requires an `id`, so a placeholder
/// `0` is sent and the server assigns the real one.
#[derive(Debug, Clone)]
pub struct CreateCampaignRequest {
    campaign: Campaign,
}

impl CreateCampaignRequest {
    pub const PLACEHOLDER_ID: i64 = 0;

    pub fn new(draft: CampaignDraft) -> Self {
        Self {
            campaign: draft.into_campaign(Self::PLACEHOLDER_ID),
        }
    }
}

impl ApiRequest for CreateCampaignRequest {
    type Body = Campaign;
    type Response = Campaign;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        CAMPAIGNS_PATH.to_string()
    }

    fn body(&self) -> Option<&Campaign> {
        Some(&self.campaign)
    }
}

/// Full replace of the campaign stored under `id`
#[derive(Debug, Clone)]
pub struct UpdateCampaignRequest {
    pub id: i64,
    pub campaign: Campaign,
}

impl ApiRequest for UpdateCampaignRequest {
    type Body = Campaign;
    type Response = Campaign;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        campaign_path(self.id)
    }

    fn body(&self) -> Option<&Campaign> {
        Some(&self.campaign)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteCampaignRequest {
    pub id: i64,
}

impl ApiRequest for DeleteCampaignRequest {
    type Body = ();
    type Response = DeleteConfirmation;
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        campaign_path(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campaign_paths_include_id() {
        assert_eq!(GetCampaignRequest { id: 4 }.path(), "/campaigns/4");
        assert_eq!(DeleteCampaignRequest { id: 9 }.path(), "/campaigns/9");
        assert_eq!(ListCampaignsRequest.path(), "/campaigns/");
    }

    #[test]
    fn create_body_carries_placeholder_id() {
        let request = CreateCampaignRequest::new(CampaignDraft {
            name: "Summer".to_string(),
            description: String::new(),
            start_date: "2024-06-01".to_string(),
            end_date: "2024-08-31".to_string(),
            budget: 10.0,
            status: false,
        });
        let body = serde_json::to_value(request.body().unwrap()).unwrap();
        assert_eq!(body["id"], 0);
        assert_eq!(body["name"], "Summer");
    }

    #[test]
    fn body_less_requests_have_no_body() {
        assert!(ListCampaignsRequest.body().is_none());
        assert!(CurrentUserRequest.body().is_none());
    }
}
