use crate::shared::api_service::ApiService;
use crate::shared::toast::ToastService;
use contracts::domain::a003_store::{StoreDto, StoreForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

#[derive(Clone, Copy)]
pub struct StoreDetailsViewModel {
    pub form: RwSignal<StoreForm>,
    pub record: RwSignal<Option<StoreDto>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    api: ApiService,
    toast: ToastService,
}

impl StoreDetailsViewModel {
    pub fn new(api: ApiService, toast: ToastService) -> Self {
        Self {
            form: RwSignal::new(StoreForm {
                is_active: true,
                ..StoreForm::default()
            }),
            record: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            api,
            toast,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.record.with(|r| r.is_some())
    }

    pub fn load(&self, id: Option<Uuid>) {
        let Some(id) = id else {
            return;
        };
        let this = *self;
        self.loading.set(true);
        spawn_local(async move {
            match this.api.stores.get(id).await {
                Ok(store) => {
                    this.form.set(StoreForm::from(&store));
                    this.record.set(Some(store));
                }
                Err(e) => {
                    this.toast.api_error(&e);
                }
            }
            this.loading.set(false);
        });
    }

    pub fn save(&self, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }
        let this = *self;
        let form = self.form.get_untracked();
        let id = self.record.with_untracked(|r| r.as_ref().map(|s| s.id));
        self.saving.set(true);
        spawn_local(async move {
            let result = match id {
                Some(id) => this.api.stores.update(id, &form).await,
                None => this.api.stores.create(&form).await,
            };
            this.saving.set(false);
            match result {
                Ok(saved) => {
                    this.toast.success(format!("Store \"{}\" saved", saved.name));
                    this.form.set(StoreForm::from(&saved));
                    this.record.set(Some(saved));
                    on_saved.run(());
                }
                Err(e) => {
                    this.toast.api_error(&e);
                }
            }
        });
    }
}
