use std::time::{Duration, Instant};

use client_core::{CustomerSession, EditorMode, Severity, Settings};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{Customer, CustomerField, CustomerId};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::{
    dispatch_backend_command, dispatch_confirmed_delete, dispatch_save,
};
use crate::controller::reducer::apply_ui_event;

const REPAINT_INTERVAL: Duration = Duration::from_millis(100);
const SUCCESS_FILL: egui::Color32 = egui::Color32::from_rgb(46, 125, 50);
const ERROR_FILL: egui::Color32 = egui::Color32::from_rgb(211, 47, 47);

enum RowAction {
    Edit(Customer),
    Delete(CustomerId),
}

enum EditorAction {
    Save,
    Cancel,
}

enum ConfirmAction {
    Delete,
    Cancel,
}

pub struct CustomerManagerApp {
    session: CustomerSession,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    api_base_url: String,
}

impl CustomerManagerApp {
    pub fn new(settings: &Settings, cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut session = CustomerSession::new(settings.notification_timeout);
        dispatch_backend_command(&cmd_tx, BackendCommand::Refresh, &mut session);
        Self {
            session,
            cmd_tx,
            ui_rx,
            api_base_url: settings.api_base_url.clone(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            apply_ui_event(&mut self.session, event, &self.cmd_tx);
        }
        self.session.notifications_mut().expire(Instant::now());
    }

    fn show_customer_table(&mut self, ui: &mut egui::Ui) {
        let mut action = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("customers_table")
                .num_columns(7)
                .striped(true)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    for header in ["ID", "Name", "Birthday", "Phone", "Email", "Address", "Actions"] {
                        ui.strong(header);
                    }
                    ui.end_row();

                    for customer in self.session.customers() {
                        ui.label(customer.id.to_string());
                        ui.label(customer.name.as_str());
                        ui.label(
                            customer
                                .birthday_date()
                                .map(|d| d.to_string())
                                .unwrap_or_else(|| customer.birthday.clone()),
                        );
                        ui.label(customer.phone.as_str());
                        ui.label(customer.email.as_str());
                        ui.label(customer.address.as_str());
                        ui.horizontal(|ui| {
                            if ui.button("Edit").clicked() {
                                action = Some(RowAction::Edit(customer.clone()));
                            }
                            if ui.button("Delete").clicked() {
                                action = Some(RowAction::Delete(customer.id));
                            }
                        });
                        ui.end_row();
                    }
                });
        });

        match action {
            Some(RowAction::Edit(customer)) => self.session.open_edit(&customer),
            Some(RowAction::Delete(id)) => self.session.request_delete(id),
            None => {}
        }
    }

    fn show_editor(&mut self, ctx: &egui::Context) {
        if !self.session.editor().is_open() {
            return;
        }
        let mode: EditorMode = self.session.editor().mode();
        let mut action = None;

        egui::Window::new(mode.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                egui::Grid::new("customer_editor")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        let draft = self.session.editor_mut().draft_mut();
                        for field in CustomerField::ALL {
                            ui.label(field.label());
                            let edit = egui::TextEdit::singleline(draft.field_mut(field))
                                .desired_width(260.0);
                            let edit = if field == CustomerField::Birthday {
                                edit.hint_text("YYYY-MM-DD")
                            } else {
                                edit
                            };
                            ui.add(edit);
                            ui.end_row();
                        }
                    });

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        action = Some(EditorAction::Cancel);
                    }
                    if ui.button(mode.action_label()).clicked() {
                        action = Some(EditorAction::Save);
                    }
                });
            });

        match action {
            Some(EditorAction::Save) => {
                dispatch_save(&self.cmd_tx, &mut self.session);
            }
            Some(EditorAction::Cancel) => self.session.close_editor(),
            None => {}
        }
    }

    fn show_delete_confirmation(&mut self, ctx: &egui::Context) {
        let Some(id) = self.session.delete_confirmation().target() else {
            return;
        };
        let mut action = None;

        egui::Window::new("Confirm Delete")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(format!("Are you sure you want to delete customer {id}?"));
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        action = Some(ConfirmAction::Cancel);
                    }
                    if ui.button("Delete").clicked() {
                        action = Some(ConfirmAction::Delete);
                    }
                });
            });

        match action {
            Some(ConfirmAction::Delete) => {
                dispatch_confirmed_delete(&self.cmd_tx, &mut self.session);
            }
            Some(ConfirmAction::Cancel) => self.session.cancel_delete(),
            None => {}
        }
    }

    fn show_notification(&mut self, ctx: &egui::Context) {
        let Some(current) = self.session.notifications().current() else {
            return;
        };
        let fill = match current.severity {
            Severity::Success => SUCCESS_FILL,
            Severity::Error => ERROR_FILL,
        };
        let message = current.message.clone();
        let mut dismissed = false;

        egui::Area::new(egui::Id::new("notification_toast"))
            .anchor(egui::Align2::LEFT_BOTTOM, [16.0, -16.0])
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).fill(fill).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.colored_label(egui::Color32::WHITE, message);
                        if ui.small_button("x").clicked() {
                            dismissed = true;
                        }
                    });
                });
            });

        if dismissed {
            self.session.notifications_mut().dismiss();
        }
    }
}

impl eframe::App for CustomerManagerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Customer Management");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(self.api_base_url.as_str());
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if ui.button("Add Customer").clicked() {
                self.session.open_create();
            }
            ui.add_space(12.0);
            self.show_customer_table(ui);
        });

        self.show_editor(ctx);
        self.show_delete_confirmation(ctx);
        self.show_notification(ctx);

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}
