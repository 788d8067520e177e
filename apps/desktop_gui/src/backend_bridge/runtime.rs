//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::{CustomerGateway, HttpCustomerGateway, SaveRequest, Settings};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(settings: Settings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.send(UiEvent::BackendUnavailable(format!(
                    "backend worker startup failure: {err}"
                )));
                return;
            }
        };

        let gateway = match HttpCustomerGateway::from_settings(&settings) {
            Ok(gateway) => gateway,
            Err(err) => {
                tracing::error!("failed to build http client: {err:#}");
                let _ = ui_tx.send(UiEvent::BackendUnavailable(format!(
                    "backend worker startup failure: {err}"
                )));
                return;
            }
        };
        tracing::info!(base_url = gateway.base_url(), "backend worker ready");

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                let event = execute(&gateway, cmd).await;
                if ui_tx.send(event).is_err() {
                    break;
                }
            }
        });
        tracing::info!("backend worker stopped");
    });
}

/// Runs one command to completion and describes its outcome for the UI.
pub async fn execute<G: CustomerGateway>(gateway: &G, cmd: BackendCommand) -> UiEvent {
    match cmd {
        BackendCommand::Refresh => UiEvent::CustomersLoaded(gateway.list_all().await),
        BackendCommand::Save(request) => {
            let mode = request.mode();
            let outcome = match &request {
                SaveRequest::Create(customer) => gateway.create(customer).await.map(|_| ()),
                SaveRequest::Update(id, customer) => gateway.update(*id, customer).await,
            };
            UiEvent::SaveFinished { mode, outcome }
        }
        BackendCommand::Delete(id) => UiEvent::DeleteFinished {
            id,
            outcome: gateway.delete(id).await,
        },
    }
}
