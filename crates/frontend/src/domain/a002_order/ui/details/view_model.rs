use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_service::ApiService;
use crate::shared::confirm::confirm;
use crate::shared::toast::ToastService;
use contracts::domain::a002_order::OrderDto;
use contracts::enums::OrderStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

#[derive(Clone, Copy)]
pub struct OrderDetailsViewModel {
    pub order_id: Uuid,
    pub order: RwSignal<Option<OrderDto>>,
    /// Status picked in the selector, not yet sent.
    pub pending_status: RwSignal<Option<OrderStatus>>,
    pub loading: RwSignal<bool>,
    pub busy: RwSignal<bool>,
    api: ApiService,
    toast: ToastService,
    tabs_store: Option<AppGlobalContext>,
}

impl OrderDetailsViewModel {
    pub fn new(order_id: Uuid, api: ApiService, toast: ToastService) -> Self {
        Self {
            order_id,
            order: RwSignal::new(None),
            pending_status: RwSignal::new(None),
            loading: RwSignal::new(false),
            busy: RwSignal::new(false),
            api,
            toast,
            tabs_store: use_context::<AppGlobalContext>(),
        }
    }

    pub fn load(&self) {
        let this = *self;
        self.loading.set(true);
        spawn_local(async move {
            match this.api.orders.get(this.order_id).await {
                Ok(order) => {
                    this.pending_status.set(Some(order.status));
                    this.order.set(Some(order));
                }
                Err(e) => {
                    this.toast.api_error(&e);
                }
            }
            this.loading.set(false);
        });
    }

    pub fn set_confirmed(&self, is_confirmed: bool) {
        let prompt = if is_confirmed {
            "Confirm this order?"
        } else {
            "Withdraw the confirmation of this order?"
        };
        if !confirm(prompt) {
            return;
        }
        let this = *self;
        self.busy.set(true);
        spawn_local(async move {
            let result = this.api.orders.confirm(this.order_id, is_confirmed).await;
            this.busy.set(false);
            match result {
                Ok(()) => {
                    this.toast.success(if is_confirmed {
                        "Order confirmed"
                    } else {
                        "Order confirmation withdrawn"
                    });
                    this.changed();
                }
                Err(e) => {
                    this.toast.api_error(&e);
                }
            }
        });
    }

    /// Writes whatever status is selected; the server decides if it is allowed.
    pub fn apply_status(&self) {
        let Some(status) = self.pending_status.get_untracked() else {
            return;
        };
        if !confirm(&format!("Change the order status to {}?", status.display_name())) {
            return;
        }
        let this = *self;
        self.busy.set(true);
        spawn_local(async move {
            let result = this.api.orders.update_status(this.order_id, status).await;
            this.busy.set(false);
            match result {
                Ok(()) => {
                    this.toast
                        .success(format!("Order status set to {}", status.display_name()));
                    this.changed();
                }
                Err(e) => {
                    this.toast.api_error(&e);
                }
            }
        });
    }

    /// Reloads the order and lets open order lists refresh.
    fn changed(&self) {
        self.load();
        if let Some(tabs_store) = self.tabs_store {
            tabs_store.bump_revision();
        }
    }

    pub fn status_changed(&self) -> bool {
        let current = self.order.with(|o| o.as_ref().map(|o| o.status));
        self.pending_status.get().is_some() && self.pending_status.get() != current
    }
}
