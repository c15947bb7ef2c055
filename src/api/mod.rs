//! HTTP API Handlers and Routes
//!
//! This module provides the REST API layer for Dossier, built on the Axum web framework.
//!
//! # Module Structure
//!
//! - [`api::handlers`](crate::api::handlers) - Request handlers for each endpoint
//! - [`api::routes`](crate::api::routes) - Route definitions and router configuration
//!
//! # API Endpoints
//!
//! ## Research (`/api/research`)
//! - `POST /api/research` - Run the research pipeline for a query and receive
//!   the structured result plus a rendered brief
//!
//! ## Health (`/api/health`)
//! - `GET /api/health` - Health check endpoint
//!
//! ## OpenAPI (`/api/openapi.json`)
//! - `GET /api/openapi.json` - Machine-readable API description
//!
//! # Error Responses
//!
//! Handlers return errors as JSON bodies of the form `{"error": "..."}`.
//! A blank query is the only client error (`400`); provider failures degrade
//! inside the pipeline and still produce a `200` with degraded content.

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;
