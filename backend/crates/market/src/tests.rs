//! Unit tests for market crate

mod fixtures {
    use std::sync::Arc;

    use kernel::id::{CategoryId, StoreId, UserId};
    use persistence::entity::store::{NewStore, Store};
    use persistence::entity::user::{NewUser, User};
    use persistence::{Gateway, MemoryGateway};

    use crate::application::config::MarketConfig;
    use crate::application::CreateProductInput;
    use crate::domain::Actor;

    pub struct Harness {
        pub gateway: Arc<MemoryGateway>,
        pub config: Arc<MarketConfig>,
    }

    impl Harness {
        pub fn new() -> Self {
            Self::with_config(MarketConfig::default())
        }

        pub fn with_config(config: MarketConfig) -> Self {
            Self {
                gateway: Arc::new(MemoryGateway::new()),
                config: Arc::new(config),
            }
        }

        /// User plus default store, inserted directly
        pub async fn seed_user(&self, email: &str) -> (User, Store) {
            self.gateway
                .insert_with_child(new_user(email), |user: &User| NewStore {
                    user_id: user.id,
                    name: "Default Store".into(),
                    url: "https://example.com".into(),
                })
                .await
                .unwrap()
        }
    }

    pub fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Budi".into(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".into(),
            phone: "08123456789".into(),
            birth_date: None,
            gender: "L".into(),
            bio: String::new(),
            occupation: String::new(),
            email: email.into(),
            province_id: "31".into(),
            city_id: "3171".into(),
            is_admin: false,
        }
    }

    pub fn owner(user: &User) -> Actor {
        Actor::new(user.id, false)
    }

    pub fn stranger() -> Actor {
        Actor::new(UserId::new(999), false)
    }

    pub fn kaos_polos(store_id: StoreId) -> CreateProductInput {
        CreateProductInput {
            store_id,
            category_id: CategoryId::new(1),
            name: "Kaos Polos".into(),
            reseller_price: 40_000,
            consumer_price: 50_000,
            stock: 10,
            description: "Katun combed 30s".into(),
        }
    }
}

mod store_tests {
    use kernel::id::UserId;

    use super::fixtures::*;
    use crate::application::{CreateStoreInput, CreateStoreUseCase, GetStoreUseCase};
    use crate::error::MarketError;

    #[tokio::test]
    async fn test_get_store_returns_default_store() {
        let h = Harness::new();
        let (user, store) = h.seed_user("budi@example.com").await;

        let found = GetStoreUseCase::new(h.gateway.clone())
            .execute(user.id)
            .await
            .unwrap();

        assert_eq!(found.id, store.id);
        assert_eq!(found.name, "Default Store");
    }

    #[tokio::test]
    async fn test_create_store_appends_and_get_keeps_first() {
        let h = Harness::new();
        let (user, default_store) = h.seed_user("budi@example.com").await;

        let created = CreateStoreUseCase::new(h.gateway.clone(), h.config.clone())
            .execute(
                owner(&user),
                CreateStoreInput {
                    user_id: user.id,
                    name: "Toko Budi".into(),
                    url: "https://toko-budi.example.com".into(),
                },
            )
            .await
            .unwrap();
        assert_ne!(created.id, default_store.id);
        assert_eq!(created.user_id, user.id);

        let found = GetStoreUseCase::new(h.gateway.clone())
            .execute(user.id)
            .await
            .unwrap();
        assert_eq!(found.id, default_store.id);
    }

    #[tokio::test]
    async fn test_store_for_missing_user() {
        let h = Harness::new();

        let err = GetStoreUseCase::new(h.gateway.clone())
            .execute(UserId::new(42))
            .await
            .unwrap_err();
        assert!(matches!(err, MarketError::UserNotFound));

        let err = CreateStoreUseCase::new(h.gateway.clone(), h.config.clone())
            .execute(
                stranger(),
                CreateStoreInput {
                    user_id: UserId::new(42),
                    name: "Toko".into(),
                    url: String::new(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, MarketError::UserNotFound));
    }

    #[tokio::test]
    async fn test_create_store_for_another_user_is_forbidden() {
        let h = Harness::new();
        let (user, _) = h.seed_user("budi@example.com").await;

        let err = CreateStoreUseCase::new(h.gateway.clone(), h.config.clone())
            .execute(
                stranger(),
                CreateStoreInput {
                    user_id: user.id,
                    name: "Toko Palsu".into(),
                    url: String::new(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, MarketError::Forbidden));
    }
}

mod address_tests {
    use persistence::Gateway;
    use persistence::Filter;
    use persistence::entity::address::Address;

    use super::fixtures::*;
    use crate::application::config::MarketConfig;
    use crate::application::{CreateAddressInput, CreateAddressUseCase, GetAddressesUseCase};

    fn address_input(user_id: kernel::id::UserId, title: &str) -> CreateAddressInput {
        CreateAddressInput {
            user_id,
            title: title.into(),
            recipient: "Budi".into(),
            phone: "08123456789".into(),
            detail: "Jl. Merdeka No. 1".into(),
        }
    }

    #[tokio::test]
    async fn test_addresses_start_empty_and_accumulate() {
        let h = Harness::new();
        let (user, _) = h.seed_user("budi@example.com").await;
        let list = GetAddressesUseCase::new(h.gateway.clone());

        assert!(list.execute(user.id).await.unwrap().is_empty());

        let create = CreateAddressUseCase::new(h.gateway.clone(), h.config.clone());
        create
            .execute(owner(&user), address_input(user.id, "Rumah"))
            .await
            .unwrap();
        create
            .execute(owner(&user), address_input(user.id, "Kantor"))
            .await
            .unwrap();

        let titles: Vec<_> = list
            .execute(user.id)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, ["Rumah", "Kantor"]);
    }

    #[tokio::test]
    async fn test_ownership_check_can_be_disabled() {
        let h = Harness::with_config(MarketConfig::without_ownership_check());
        let (user, _) = h.seed_user("budi@example.com").await;

        CreateAddressUseCase::new(h.gateway.clone(), h.config.clone())
            .execute(stranger(), address_input(user.id, "Rumah"))
            .await
            .unwrap();

        assert_eq!(
            h.gateway.count_where::<Address>(&Filter::all()).await.unwrap(),
            1
        );
    }
}

mod category_tests {
    use super::fixtures::*;
    use crate::application::{CreateCategoryInput, CreateCategoryUseCase, GetCategoriesUseCase};

    #[tokio::test]
    async fn test_categories_are_global() {
        let h = Harness::new();
        let create = CreateCategoryUseCase::new(h.gateway.clone());

        for name in ["Pakaian", "Elektronik"] {
            create
                .execute(CreateCategoryInput { name: name.into() })
                .await
                .unwrap();
        }

        let names: Vec<_> = GetCategoriesUseCase::new(h.gateway.clone())
            .execute()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["Pakaian", "Elektronik"]);
    }
}

mod product_tests {
    use kernel::id::StoreId;
    use persistence::entity::product::Product;
    use persistence::{Filter, Gateway};

    use super::fixtures::*;
    use crate::application::config::MarketConfig;
    use crate::application::{CreateProductUseCase, GetProductsUseCase};
    use crate::error::MarketError;

    #[tokio::test]
    async fn test_create_product_derives_slug() {
        let h = Harness::new();
        let (user, store) = h.seed_user("budi@example.com").await;

        let product = CreateProductUseCase::new(h.gateway.clone(), h.config.clone())
            .execute(owner(&user), kaos_polos(store.id))
            .await
            .unwrap();

        assert_eq!(product.slug, "kaos-polos");
        assert_eq!(product.store_id, store.id);
        assert_eq!(product.created_at, product.updated_at);

        let listed = GetProductsUseCase::new(h.gateway.clone())
            .execute(store.id)
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, product.id);
    }

    #[tokio::test]
    async fn test_product_for_missing_store_persists_nothing() {
        let h = Harness::new();
        let (user, _) = h.seed_user("budi@example.com").await;

        let err = CreateProductUseCase::new(h.gateway.clone(), h.config.clone())
            .execute(owner(&user), kaos_polos(StoreId::new(77)))
            .await
            .unwrap_err();

        assert!(matches!(err, MarketError::StoreNotFound));
        assert_eq!(
            h.gateway.count_where::<Product>(&Filter::all()).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_duplicate_names_get_numbered_slugs() {
        let h = Harness::new();
        let (user, store) = h.seed_user("budi@example.com").await;
        let create = CreateProductUseCase::new(h.gateway.clone(), h.config.clone());

        let mut slugs = Vec::new();
        for _ in 0..3 {
            let p = create
                .execute(owner(&user), kaos_polos(store.id))
                .await
                .unwrap();
            slugs.push(p.slug);
        }
        assert_eq!(slugs, ["kaos-polos", "kaos-polos-2", "kaos-polos-3"]);
    }

    #[tokio::test]
    async fn test_same_slug_allowed_in_other_store() {
        let h = Harness::new();
        let (budi, budi_store) = h.seed_user("budi@example.com").await;
        let (sari, sari_store) = h.seed_user("sari@example.com").await;
        let create = CreateProductUseCase::new(h.gateway.clone(), h.config.clone());

        let a = create
            .execute(owner(&budi), kaos_polos(budi_store.id))
            .await
            .unwrap();
        let b = create
            .execute(owner(&sari), kaos_polos(sari_store.id))
            .await
            .unwrap();

        assert_eq!(a.slug, b.slug);
    }

    #[tokio::test]
    async fn test_slug_budget_exhausted() {
        let h = Harness::with_config(MarketConfig {
            slug_max_attempts: 2,
            ..MarketConfig::default()
        });
        let (user, store) = h.seed_user("budi@example.com").await;
        let create = CreateProductUseCase::new(h.gateway.clone(), h.config.clone());

        create.execute(owner(&user), kaos_polos(store.id)).await.unwrap();
        create.execute(owner(&user), kaos_polos(store.id)).await.unwrap();
        let err = create
            .execute(owner(&user), kaos_polos(store.id))
            .await
            .unwrap_err();

        assert!(matches!(err, MarketError::SlugExhausted { .. }));
    }

    #[tokio::test]
    async fn test_product_in_foreign_store_is_forbidden() {
        let h = Harness::new();
        let (_, store) = h.seed_user("budi@example.com").await;

        let err = CreateProductUseCase::new(h.gateway.clone(), h.config.clone())
            .execute(stranger(), kaos_polos(store.id))
            .await
            .unwrap_err();

        assert!(matches!(err, MarketError::Forbidden));
        assert_eq!(
            h.gateway.count_where::<Product>(&Filter::all()).await.unwrap(),
            0
        );
    }
}

mod transaction_tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::http::StatusCode;
    use kernel::id::{AddressId, Id, UserId};
    use persistence::entity::transaction::Transaction;
    use persistence::entity::{Entity, NewEntity};
    use persistence::{Filter, Gateway, MemoryGateway, StorageResult};

    use super::fixtures::*;
    use crate::application::config::MarketConfig;
    use crate::application::{
        CreateTransactionInput, CreateTransactionUseCase, GetTransactionsUseCase,
    };
    use crate::error::MarketError;

    fn order(user_id: UserId) -> CreateTransactionInput {
        CreateTransactionInput {
            user_id,
            address_id: AddressId::new(1),
            total_price: 150_000,
            payment_method: "transfer".into(),
        }
    }

    #[tokio::test]
    async fn test_create_transaction_assigns_invoice() {
        let h = Harness::new();
        let (user, _) = h.seed_user("budi@example.com").await;

        let tx = CreateTransactionUseCase::new(h.gateway.clone(), h.config.clone())
            .execute(owner(&user), order(user.id))
            .await
            .unwrap();

        assert!(platform::invoice::is_well_formed(&tx.invoice_code));
        assert_eq!(tx.user_id, user.id);

        let listed = GetTransactionsUseCase::new(h.gateway.clone())
            .execute(user.id)
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn test_transaction_for_missing_user() {
        let h = Harness::new();

        let err = CreateTransactionUseCase::new(h.gateway.clone(), h.config.clone())
            .execute(stranger(), order(UserId::new(5)))
            .await
            .unwrap_err();
        assert!(matches!(err, MarketError::UserNotFound));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_transactions_get_distinct_invoices() {
        const N: usize = 100;
        let h = Arc::new(Harness::new());
        let (user, _) = h.seed_user("budi@example.com").await;

        let handles: Vec<_> = (0..N)
            .map(|_| {
                let h = h.clone();
                let user_id = user.id;
                tokio::spawn(async move {
                    CreateTransactionUseCase::new(h.gateway.clone(), h.config.clone())
                        .execute(crate::domain::Actor::new(user_id, false), order(user_id))
                        .await
                })
            })
            .collect();

        let mut codes = HashSet::new();
        for handle in handles {
            let tx = handle.await.unwrap().unwrap();
            assert!(!tx.invoice_code.is_empty());
            codes.insert(tx.invoice_code);
        }
        assert_eq!(codes.len(), N);
    }

    /// Hands out `codes` in order, repeating the last one
    fn scripted(codes: &'static [&'static str]) -> impl Fn() -> String + Send + Sync + 'static {
        let next = AtomicUsize::new(0);
        move || {
            let i = next.fetch_add(1, Ordering::SeqCst).min(codes.len() - 1);
            codes[i].to_owned()
        }
    }

    /// Reports every code as unused, so duplicates reach the unique index
    struct UncheckedInvoices(Arc<MemoryGateway>);

    impl Gateway for UncheckedInvoices {
        async fn insert<N: NewEntity>(&self, new: N) -> StorageResult<N::Entity> {
            self.0.insert(new).await
        }

        async fn insert_with_child<P, C, F>(
            &self,
            parent: P,
            child: F,
        ) -> StorageResult<(P::Entity, C::Entity)>
        where
            P: NewEntity,
            C: NewEntity,
            F: FnOnce(&P::Entity) -> C + Send,
        {
            self.0.insert_with_child(parent, child).await
        }

        async fn get_by_id<E: Entity>(&self, id: Id<E::Marker>) -> StorageResult<Option<E>> {
            self.0.get_by_id(id).await
        }

        async fn find_where<E: Entity>(&self, filter: &Filter) -> StorageResult<Vec<E>> {
            self.0.find_where(filter).await
        }

        async fn count_where<E: Entity>(&self, _filter: &Filter) -> StorageResult<i64> {
            Ok(0)
        }

        async fn ping(&self) -> StorageResult<()> {
            self.0.ping().await
        }
    }

    #[tokio::test]
    async fn test_taken_invoice_code_is_regenerated() {
        let config = MarketConfig::default().with_invoice_generator(scripted(&[
            "INV-20261016-AAAAAA",
            "INV-20261016-AAAAAA",
            "INV-20261016-BBBBBB",
        ]));
        let h = Harness::with_config(config);
        let (user, _) = h.seed_user("budi@example.com").await;
        let create = CreateTransactionUseCase::new(h.gateway.clone(), h.config.clone());

        let first = create.execute(owner(&user), order(user.id)).await.unwrap();
        let second = create.execute(owner(&user), order(user.id)).await.unwrap();

        assert_eq!(first.invoice_code, "INV-20261016-AAAAAA");
        assert_eq!(second.invoice_code, "INV-20261016-BBBBBB");
    }

    #[tokio::test]
    async fn test_unique_index_collision_is_regenerated() {
        let config = MarketConfig::default().with_invoice_generator(scripted(&[
            "INV-20261016-AAAAAA",
            "INV-20261016-AAAAAA",
            "INV-20261016-BBBBBB",
        ]));
        let h = Harness::with_config(config);
        let (user, _) = h.seed_user("budi@example.com").await;
        let gateway = Arc::new(UncheckedInvoices(h.gateway.clone()));
        let create = CreateTransactionUseCase::new(gateway, h.config.clone());

        create.execute(owner(&user), order(user.id)).await.unwrap();
        let second = create.execute(owner(&user), order(user.id)).await.unwrap();

        assert_eq!(second.invoice_code, "INV-20261016-BBBBBB");
        assert_eq!(
            h.gateway.count_where::<Transaction>(&Filter::all()).await.unwrap(),
            2
        );
    }

    #[tokio::test]
    async fn test_invoice_attempts_exhausted() {
        let config = MarketConfig {
            invoice_max_attempts: 3,
            ..MarketConfig::default()
        }
        .with_invoice_generator(|| "INV-20261016-SAMASA".to_owned());
        let h = Harness::with_config(config);
        let (user, _) = h.seed_user("budi@example.com").await;

        let checked = CreateTransactionUseCase::new(h.gateway.clone(), h.config.clone());
        checked.execute(owner(&user), order(user.id)).await.unwrap();

        let err = checked
            .execute(owner(&user), order(user.id))
            .await
            .unwrap_err();
        assert!(matches!(err, MarketError::InvoiceCodeExhausted { attempts: 3 }));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let unchecked = CreateTransactionUseCase::new(
            Arc::new(UncheckedInvoices(h.gateway.clone())),
            h.config.clone(),
        );
        let err = unchecked
            .execute(owner(&user), order(user.id))
            .await
            .unwrap_err();
        assert!(matches!(err, MarketError::InvoiceCodeExhausted { attempts: 3 }));
        assert_eq!(
            h.gateway.count_where::<Transaction>(&Filter::all()).await.unwrap(),
            1
        );
    }
}

mod router_tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use platform::token::TokenSigner;
    use tower::ServiceExt;

    use auth::{AuthConfig, SessionGate};
    use persistence::MemoryGateway;

    use super::fixtures::*;
    use crate::application::config::MarketConfig;
    use crate::presentation::{MarketAppState, market_router_generic};

    const FORM: &str = "application/x-www-form-urlencoded";

    struct App {
        router: Router,
        signer: Arc<TokenSigner>,
        harness: Harness,
    }

    fn app() -> App {
        let harness = Harness::new();
        let signer = Arc::new(AuthConfig::with_random_secret().token_signer().unwrap());
        let state = MarketAppState::<MemoryGateway>::new(
            harness.gateway.clone(),
            MarketConfig::default(),
        );
        App {
            router: market_router_generic(state, SessionGate::new(signer.clone())),
            signer,
            harness,
        }
    }

    async fn call(router: Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
        let resp = router.oneshot(req).await.unwrap();
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    fn post(uri: &str, token: Option<&str>, body: &str) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, FORM);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, token);
        }
        builder.body(Body::from(body.to_owned())).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_reads_are_public() {
        let app = app();
        app.harness.seed_user("budi@example.com").await;

        let (status, body) = call(app.router.clone(), get("/users/1/store")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["nama_toko"], "Default Store");

        let (status, body) = call(app.router, get("/categories")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_writes_require_token() {
        let app = app();
        app.harness.seed_user("budi@example.com").await;

        let (status, body) = call(
            app.router,
            post("/users/1/store", None, "nama_toko=Toko+Budi"),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Missing authorization token");
    }

    #[tokio::test]
    async fn test_create_product_over_http() {
        let app = app();
        let (user, _) = app.harness.seed_user("budi@example.com").await;
        let token = app
            .signer
            .issue(&user.email, user.id.get(), false)
            .unwrap();

        let (status, body) = call(
            app.router,
            post(
                "/stores/1/products",
                Some(&token),
                "id_category=1&nama_produk=Kaos+Polos&harga_reseller=40000&harga_konsumen=50000&stok=10&deskripsi=Katun",
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["slug"], "kaos-polos");
        assert_eq!(body["id_toko"], 1);
    }

    #[tokio::test]
    async fn test_invalid_numeric_field_is_rejected() {
        let app = app();
        let (user, _) = app.harness.seed_user("budi@example.com").await;
        let token = app
            .signer
            .issue(&user.email, user.id.get(), false)
            .unwrap();

        let (status, body) = call(
            app.router,
            post(
                "/stores/1/products",
                Some(&token),
                "id_category=1&nama_produk=Kaos&harga_reseller=abc&harga_konsumen=1&stok=1",
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("harga_reseller"));
    }

    #[tokio::test]
    async fn test_other_users_token_is_forbidden() {
        let app = app();
        app.harness.seed_user("budi@example.com").await;
        let token = app.signer.issue("sari@example.com", 2, false).unwrap();

        let (status, _) = call(
            app.router,
            post("/users/1/transactions", Some(&token), "id_alamat=1&harga_total=1000&metode_pembayaran=cod"),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_unknown_parents_are_not_found() {
        let app = app();

        let (status, body) = call(app.router.clone(), get("/users/9/store")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "User not found");

        let (status, body) = call(app.router.clone(), get("/stores/9/products")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Store not found");

        let (status, _) = call(app.router, get("/users/abc/address")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
