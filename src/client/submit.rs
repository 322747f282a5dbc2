//! Submission orchestration: gate admission, request assembly, and status mapping.
//!
//! Every call resolves its endpoint and then waits on the shared
//! [`ThrottleGate`](crate::throttle::ThrottleGate), so an admission is consumed even when the
//! registry later rejects the document. Nothing here retries; each failure surfaces once with
//! its cause.

// self
use crate::{
	_prelude::*,
	client::RegistryClient,
	http::{DocumentTransport, OutboundRequest},
	obs::{self, SubmissionOutcome, SubmissionSpan},
	schema::{Document, ProductGroup, SubmissionRequest},
};

impl<T> RegistryClient<T>
where
	T: ?Sized + DocumentTransport,
{
	/// Introduces goods into circulation for `product_group`.
	///
	/// Waits for a gate admission, then posts an inline-JSON `LP_INTRODUCE_GOODS` request.
	pub async fn submit(
		&self,
		product_group: ProductGroup,
		document: Document,
		signature: impl Into<String>,
	) -> Result<()> {
		self.dispatch(SubmissionRequest::introduce_goods(product_group, document, signature), None)
			.await
	}

	/// Same as [`submit`](Self::submit), but gives up with [`Error::ThrottleCancelled`] if
	/// `cancel` fires before an admission is granted.
	pub async fn submit_with(
		&self,
		product_group: ProductGroup,
		document: Document,
		signature: impl Into<String>,
		cancel: &CancellationToken,
	) -> Result<()> {
		self.dispatch(
			SubmissionRequest::introduce_goods(product_group, document, signature),
			Some(cancel),
		)
		.await
	}

	/// Submits a caller-assembled request.
	pub async fn submit_request(&self, request: SubmissionRequest) -> Result<()> {
		self.dispatch(request, None).await
	}

	/// Submits a caller-assembled request with a cancellable admission wait.
	pub async fn submit_request_with(
		&self,
		request: SubmissionRequest,
		cancel: &CancellationToken,
	) -> Result<()> {
		self.dispatch(request, Some(cancel)).await
	}

	async fn dispatch(
		&self,
		request: SubmissionRequest,
		cancel: Option<&CancellationToken>,
	) -> Result<()> {
		let product_group = request.product_group;
		let span = SubmissionSpan::new(product_group, "submit");

		obs::record_submission_outcome(product_group, SubmissionOutcome::Attempt);

		let result = span
			.instrument(async move {
				// Endpoint problems never cost an admission.
				let url = self.descriptor.create_document_url(product_group)?;

				match cancel {
					Some(token) => self.gate.acquire_with(token).await?,
					None => self.gate.acquire().await,
				}

				self.send(url, &request).await
			})
			.await;

		match &result {
			Ok(_) => obs::record_submission_outcome(product_group, SubmissionOutcome::Success),
			Err(_e) => {
				#[cfg(feature = "tracing")]
				tracing::warn!(
					product_group = product_group.as_str(),
					error = %_e,
					"Registry submission failed."
				);

				obs::record_submission_outcome(product_group, SubmissionOutcome::Failure)
			},
		}

		result
	}

	async fn send(&self, url: Url, request: &SubmissionRequest) -> Result<()> {
		let body = request.to_json()?;
		let meta =
			self.transport.post(OutboundRequest { url, token: self.token.clone(), body }).await?;

		if meta.is_accepted() {
			Ok(())
		} else {
			Err(Error::UnexpectedStatus { status: meta.status })
		}
	}
}
