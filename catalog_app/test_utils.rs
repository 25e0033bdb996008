#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use std::{
        collections::BTreeMap,
        sync::{Arc, Mutex},
    };

    use catalog_types::common::{Product, User};
    use catalog_types::errors::{ApplicationError, DbError};

    use crate::repository::{ProductRepository, UserRepository};

    /// In-memory product store. Ids are assigned sequentially on
    /// create; `created` records invocation order for ordering tests and
    /// `fail_next` arms a one-shot store failure.
    #[derive(Default, Clone)]
    pub struct MockProductRepository {
        products: Arc<Mutex<BTreeMap<i32, Product>>>,
        created: Arc<Mutex<Vec<String>>>,
        next_id: Arc<Mutex<i32>>,
        fail_next: Arc<Mutex<bool>>,
    }

    impl MockProductRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn seed(&self, product: Product) {
            self.products
                .lock()
                .unwrap()
                .insert(product.id, product);
        }

        pub fn fail_next(&self) {
            *self.fail_next.lock().unwrap() = true;
        }

        /// Names passed to `create`, in invocation order.
        pub fn created(&self) -> Vec<String> {
            self.created.lock().unwrap().clone()
        }

        fn take_failure(&self) -> Result<(), ApplicationError> {
            let mut fail = self.fail_next.lock().unwrap();
            if *fail {
                *fail = false;
                return Err(ApplicationError::Db(DbError::Connection(
                    "injected store failure".to_string(),
                )));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ProductRepository for MockProductRepository {
        async fn create(&self, name: String, price: f32) -> Result<(), ApplicationError> {
            self.take_failure()?;
            self.created.lock().unwrap().push(name.clone());

            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            self.products
                .lock()
                .unwrap()
                .insert(*next_id, Product::new(*next_id, name, price));
            Ok(())
        }

        async fn get_by_id(&self, id: i32) -> Result<Product, ApplicationError> {
            self.take_failure()?;
            self.products
                .lock()
                .unwrap()
                .get(&id)
                .cloned()
                .ok_or_else(|| ApplicationError::Db(DbError::ProductNotFound(id)))
        }

        async fn get_all(&self) -> Result<Vec<Product>, ApplicationError> {
            self.take_failure()?;
            Ok(self.products.lock().unwrap().values().cloned().collect())
        }

        async fn update(&self, id: i32, name: String, price: f32) -> Result<(), ApplicationError> {
            self.take_failure()?;
            let mut products = self.products.lock().unwrap();
            match products.get_mut(&id) {
                Some(product) => {
                    product.name = name;
                    product.price = price;
                    Ok(())
                }
                None => Err(ApplicationError::Db(DbError::ProductNotFound(id))),
            }
        }

        async fn delete(&self, id: i32) -> Result<(), ApplicationError> {
            self.take_failure()?;
            self.products
                .lock()
                .unwrap()
                .remove(&id)
                .map(|_| ())
                .ok_or_else(|| ApplicationError::Db(DbError::ProductNotFound(id)))
        }
    }

    #[derive(Default, Clone)]
    pub struct MockUserRepository {
        users: Arc<Mutex<BTreeMap<i32, User>>>,
        next_id: Arc<Mutex<i32>>,
    }

    impl MockUserRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn seed(&self, user: User) {
            self.users.lock().unwrap().insert(user.id, user);
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn create(&self, name: String, lastname: String) -> Result<(), ApplicationError> {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            self.users
                .lock()
                .unwrap()
                .insert(*next_id, User::new(*next_id, name, lastname));
            Ok(())
        }

        async fn get_all(&self) -> Result<Vec<User>, ApplicationError> {
            Ok(self.users.lock().unwrap().values().cloned().collect())
        }

        async fn update(
            &self,
            id: i32,
            name: String,
            lastname: String,
        ) -> Result<(), ApplicationError> {
            let mut users = self.users.lock().unwrap();
            match users.get_mut(&id) {
                Some(user) => {
                    user.name = name;
                    user.lastname = lastname;
                    Ok(())
                }
                None => Err(ApplicationError::Db(DbError::UserNotFound(id))),
            }
        }

        async fn delete(&self, id: i32) -> Result<(), ApplicationError> {
            self.users
                .lock()
                .unwrap()
                .remove(&id)
                .map(|_| ())
                .ok_or_else(|| ApplicationError::Db(DbError::UserNotFound(id)))
        }
    }
}
