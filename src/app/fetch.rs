use std::sync::Arc;

use log::debug;
use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle};

use crate::{
    app::state::{FetchKind, FetchOutcome, FetchPayload, FetchRequest},
    services::QuoteService,
};

pub async fn execute<S: QuoteService>(service: &S, request: FetchRequest) -> FetchOutcome {
    let payload = match &request.kind {
        FetchKind::Movers => FetchPayload::Movers(service.get_movers().await),
        FetchKind::Search(keyword) => FetchPayload::Search(service.search_symbols(keyword).await),
        FetchKind::Prices(symbol) => {
            FetchPayload::Prices(service.get_price_history(symbol).await)
        }
    };

    FetchOutcome {
        ticket: request.ticket,
        payload,
    }
}

/// Runs the request on its own task and sends the outcome back to the UI loop.
pub fn dispatch<S: QuoteService>(
    service: Arc<S>,
    request: FetchRequest,
    tx: UnboundedSender<FetchOutcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = execute(service.as_ref(), request).await;
        if tx.send(outcome).is_err() {
            debug!("UI loop closed before fetch completed");
        }
    })
}
