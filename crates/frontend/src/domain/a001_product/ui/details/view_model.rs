use crate::shared::api_service::ApiService;
use crate::shared::toast::ToastService;
use contracts::domain::a001_product::{ProductDto, ProductForm};
use contracts::domain::a003_store::StoreDto;
use contracts::shared::PageQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

/// Store picker shows at most this many stores.
const STORE_OPTIONS_LIMIT: u32 = 100;

#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductForm>,
    pub record: RwSignal<Option<ProductDto>>,
    pub stores: RwSignal<Vec<StoreDto>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    api: ApiService,
    toast: ToastService,
}

impl ProductDetailsViewModel {
    pub fn new(api: ApiService, toast: ToastService) -> Self {
        Self {
            form: RwSignal::new(ProductForm {
                is_active: true,
                ..ProductForm::default()
            }),
            record: RwSignal::new(None),
            stores: RwSignal::new(Vec::new()),
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
        let this = *self;
        spawn_local(async move {
            match this
                .api
                .stores
                .list(&PageQuery::with_page_size(STORE_OPTIONS_LIMIT))
                .await
            {
                Ok(page) => this.stores.set(page.data),
                Err(e) => {
                    this.toast.api_error(&e);
                }
            }
        });

        let Some(id) = id else {
            return;
        };
        self.loading.set(true);
        spawn_local(async move {
            match this.api.products.get(id).await {
                Ok(product) => {
                    this.form.set(ProductForm::from(&product));
                    this.record.set(Some(product));
                }
                Err(e) => {
                    this.toast.api_error(&e);
                }
            }
            this.loading.set(false);
        });
    }

    /// Create or update; the server validates and its message is toasted.
    pub fn save(&self, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }
        let this = *self;
        let form = self.form.get_untracked();
        let id = self.record.with_untracked(|r| r.as_ref().map(|p| p.id));
        self.saving.set(true);
        spawn_local(async move {
            let result = match id {
                Some(id) => this.api.products.update(id, &form).await,
                None => this.api.products.create(&form).await,
            };
            this.saving.set(false);
            match result {
                Ok(saved) => {
                    this.toast.success(format!("Product \"{}\" saved", saved.name));
                    this.form.set(ProductForm::from(&saved));
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
