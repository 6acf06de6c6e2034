//! Entity REST Client
//!
//! `fetch`-backed implementation of `EntityService`. Transport failures map
//! to `AdminError::Network`, non-2xx answers are decoded by the core's wire
//! module so the browser and the native tests agree on error text.

use std::marker::PhantomData;

use async_trait::async_trait;
use election_admin_core::service::{wire, Endpoints};
use election_admin_core::{AdminConfig, AdminEntity, AdminError, EntityId, EntityService, Result, Transition};
use gloo_net::http::{Request, RequestBuilder};
use log::debug;

/// REST client for one entity type
pub struct RestService<E> {
    endpoints: Endpoints,
    token: Option<String>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for RestService<E> {
    fn clone(&self) -> Self {
        Self {
            endpoints: self.endpoints.clone(),
            token: self.token.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: AdminEntity> RestService<E> {
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            endpoints: Endpoints::new(config.api_base_url.clone()),
            token: config.api_token.clone(),
            _entity: PhantomData,
        }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn mutate(&self, request: std::result::Result<Request, gloo_net::Error>) -> Result<String> {
        let (status, body) = dispatch(request).await?;
        wire::decode_mutation(status, &body)
    }

    async fn transition(&self, id: EntityId, transition: Transition) -> Result<String> {
        let url = self.endpoints.transition::<E>(id, transition);
        self.mutate(self.authorize(Request::patch(&url)).build()).await
    }
}

/// Send a prepared request and read the whole body
async fn dispatch(request: std::result::Result<Request, gloo_net::Error>) -> Result<(u16, String)> {
    let request = request.map_err(|e| AdminError::Network(e.to_string()))?;
    let (method, url) = (request.method(), request.url());
    let response = request
        .send()
        .await
        .map_err(|e| AdminError::Network(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AdminError::Decode(e.to_string()))?;
    debug!("{:?} {} -> {}", method, url, status);
    Ok((status, body))
}

#[async_trait(?Send)]
impl<E: AdminEntity> EntityService<E> for RestService<E> {
    async fn find_all(&self) -> Result<Vec<E>> {
        let url = self.endpoints.collection::<E>();
        let (status, body) = dispatch(self.authorize(Request::get(&url)).build()).await?;
        if !(200..300).contains(&status) {
            return Err(wire::decode_error(status, &body));
        }
        wire::decode_list(&body)
    }

    async fn create(&self, draft: &E::Draft) -> Result<String> {
        let url = self.endpoints.collection::<E>();
        self.mutate(self.authorize(Request::post(&url)).json(draft)).await
    }

    async fn update(&self, record: &E) -> Result<String> {
        let url = self.endpoints.record::<E>(record.id());
        self.mutate(self.authorize(Request::put(&url)).json(record)).await
    }

    async fn suspend(&self, id: EntityId) -> Result<String> {
        self.transition(id, Transition::Suspend).await
    }

    async fn recover(&self, id: EntityId) -> Result<String> {
        self.transition(id, Transition::Recover).await
    }
}
