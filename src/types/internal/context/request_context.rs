use std::net::IpAddr;

use crate::{
    providers::TokenProvider,
    types::internal::auth::{Claims, Role},
};
use poem::Request;
use poem_openapi::auth::{Bearer, BearerAuthorization};

use super::{request_id::RequestId, request_source::RequestSource};

/// Request context that flows through all layers
///
/// Carries who is calling and from where. Coordinators read the identity from
/// here instead of re-validating the bearer credential.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    /// IP address of the client making the request
    pub ip_address: Option<IpAddr>,

    /// Unique identifier for this request (for tracing across layers)
    pub request_id: RequestId,

    /// Whether the request is authenticated (JWT validated successfully)
    pub authenticated: bool,

    /// Full JWT claims if authenticated
    pub claims: Option<Claims>,

    /// Source of the request (API or CLI)
    pub source: RequestSource,

    /// Actor who initiated the operation
    pub actor_id: String,
}

impl RequestContext {
    /// Create an unauthenticated context for an API request
    pub fn new() -> Self {
        Self {
            ip_address: None,
            request_id: RequestId::new(),
            authenticated: false,
            claims: None,
            source: RequestSource::API,
            actor_id: "anonymous".to_owned(),
        }
    }

    /// Create a RequestContext for CLI operations
    pub fn for_cli(command_name: &str) -> Self {
        Self {
            source: RequestSource::CLI,
            actor_id: format!("cli:{}", command_name),
            ..Self::new()
        }
    }

    fn extract_bearer(req: &Request) -> Option<Bearer> {
        Bearer::from_request(req).ok()
    }

    /// Extract IP address from request headers
    ///
    /// Checks X-Forwarded-For, X-Real-IP, and falls back to remote address.
    fn extract_ip_address(req: &Request) -> Option<IpAddr> {
        // Check X-Forwarded-For header (proxy/load balancer)
        if let Some(forwarded) = req.header("X-Forwarded-For") {
            if let Some(ip) = forwarded.split(',').next() {
                return ip.trim().parse().ok();
            }
        }

        // Check X-Real-IP header (nginx)
        if let Some(real_ip) = req.header("X-Real-IP") {
            return real_ip.parse().ok();
        }

        // Fall back to remote address
        req.remote_addr().as_socket_addr().map(|addr| addr.ip())
    }

    /// Create RequestContext from an incoming request
    ///
    /// Called at the beginning of every endpoint. A missing, malformed, expired
    /// or tampered bearer token leaves the context unauthenticated; endpoints
    /// that need an identity reject it later through the access provider.
    pub fn from_request(req: &Request, token_provider: &TokenProvider) -> Self {
        let mut ctx = Self::new();

        if let Some(ip) = Self::extract_ip_address(req) {
            ctx = ctx.with_ip_address(ip);
        }

        if let Some(bearer) = Self::extract_bearer(req) {
            match token_provider.validate_jwt(&bearer.token) {
                Ok(claims) => {
                    let sub = claims.sub.clone();
                    ctx = ctx.with_auth(claims).with_actor_id(sub);
                }
                Err(_) => {
                    // TokenProvider.validate_jwt already logged the failure
                }
            }
        }

        tracing::trace!("Request context created: {:?}", ctx);

        ctx
    }

    /// Set the ip_address
    pub fn with_ip_address(mut self, ip_address: IpAddr) -> Self {
        self.ip_address = Some(ip_address);
        self
    }

    /// Set authentication state with claims
    pub fn with_auth(mut self, claims: Claims) -> Self {
        self.authenticated = true;
        self.claims = Some(claims);
        self
    }

    /// Set the actor_id
    pub fn with_actor_id(mut self, actor_id: impl Into<String>) -> Self {
        self.actor_id = actor_id.into();
        self
    }

    /// Authenticated user id, if any
    pub fn user_id(&self) -> Option<&str> {
        self.claims.as_ref().map(|claims| claims.sub.as_str())
    }

    /// Role carried by the token, if any
    pub fn role(&self) -> Option<Role> {
        self.claims.as_ref().map(|claims| claims.role)
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
