//! Iterations service.

use std::sync::Arc;

use serde::Deserialize;

use crate::client::{ClientInner, RequestOption};
use crate::models::{
    CountResponse, CreateIterationRequest, GetIterationsCountRequest, GetIterationsRequest,
    GetTemplateListRequest, GetWorkitemTypesRequest, Iteration, WorkitemTemplate, WorkitemType,
};
use crate::Result;

#[derive(Deserialize)]
struct IterationItem {
    #[serde(rename = "Iteration")]
    iteration: Iteration,
}

/// Service for iterations and their categories and templates.
pub struct IterationsService {
    inner: Arc<ClientInner>,
}

impl IterationsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List iterations matching a filter.
    pub async fn get_iterations(
        &self,
        request: &GetIterationsRequest,
        opts: &[RequestOption],
    ) -> Result<Vec<Iteration>> {
        let items: Vec<IterationItem> = self.inner.get("iterations", request, opts).await?;
        Ok(items.into_iter().map(|item| item.iteration).collect())
    }

    /// Count iterations matching a filter.
    pub async fn get_iterations_count(
        &self,
        request: &GetIterationsCountRequest,
        opts: &[RequestOption],
    ) -> Result<i64> {
        let response: CountResponse = self.inner.get("iterations/count", request, opts).await?;
        Ok(response.count)
    }

    /// Create an iteration.
    pub async fn create_iteration(
        &self,
        request: &CreateIterationRequest,
        opts: &[RequestOption],
    ) -> Result<Iteration> {
        let item: IterationItem = self.inner.post("iterations", request, opts).await?;
        Ok(item.iteration)
    }

    /// List the iteration categories of a workspace.
    pub async fn get_workitem_types(
        &self,
        request: &GetWorkitemTypesRequest,
        opts: &[RequestOption],
    ) -> Result<Vec<WorkitemType>> {
        #[derive(Deserialize)]
        struct Item {
            #[serde(rename = "WorkitemType")]
            workitem_type: WorkitemType,
        }

        let items: Vec<Item> = self
            .inner
            .get("iterations/workitem_types", request, opts)
            .await?;
        Ok(items.into_iter().map(|item| item.workitem_type).collect())
    }

    /// List the iteration templates of a workspace.
    pub async fn get_template_list(
        &self,
        request: &GetTemplateListRequest,
        opts: &[RequestOption],
    ) -> Result<Vec<WorkitemTemplate>> {
        #[derive(Deserialize)]
        struct Item {
            #[serde(rename = "WorkitemTemplate")]
            template: WorkitemTemplate,
        }

        let items: Vec<Item> = self
            .inner
            .get("iterations/template_list", request, opts)
            .await?;
        Ok(items.into_iter().map(|item| item.template).collect())
    }
}
