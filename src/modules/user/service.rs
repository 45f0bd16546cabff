use std::sync::Arc;

use super::model::{RegisterUserRequest, UpdateUserRequest, User};
use super::name::rename;
use super::repository::UserRepository;
use crate::DeriveInjectable as Injectable;
use crate::error::{Result, UserhubError};

#[derive(Injectable)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub async fn register(&self, req: RegisterUserRequest) -> Result<User> {
        let user = self
            .repository
            .insert(req.full_name())
            .await
            .map_err(UserhubError::InsertFailed)?;
        tracing::info!(user_id = user.id, "user registered");
        Ok(user)
    }

    pub async fn update(&self, req: UpdateUserRequest) -> Result<User> {
        let mut user = self
            .lookup(req.id)
            .await
            .ok_or(UserhubError::LookupFailed)?;

        user.name = rename(
            &user.name,
            req.first_name.as_deref(),
            req.last_name.as_deref(),
        )?;

        let user = self
            .repository
            .update(&user)
            .await
            .map_err(UserhubError::UpdateFailed)?;
        tracing::info!(user_id = user.id, "user updated");
        Ok(user)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let user = self.find(id).await?;
        self.repository
            .delete(user.id)
            .await
            .map_err(UserhubError::DeleteFailed)?;
        tracing::info!(user_id = id, "user deleted");
        Ok(())
    }

    pub async fn find(&self, id: i64) -> Result<User> {
        self.lookup(id).await.ok_or(UserhubError::UserNotFound)
    }

    /// Load a user, folding "no such row", out-of-range ids and storage
    /// errors into `None`. Storage errors are logged.
    async fn lookup(&self, id: i64) -> Option<User> {
        let id = i32::try_from(id).ok()?;
        match self.repository.find_by_id(id).await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(user_id = id, error = %e, "user lookup failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sea_orm::DbErr;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    /// In-memory repository; `fail_writes` makes every write error out.
    #[derive(Default)]
    struct MemoryRepository {
        users: Mutex<BTreeMap<i32, String>>,
        fail_writes: bool,
    }

    impl MemoryRepository {
        fn with(users: &[(i32, &str)]) -> Self {
            let repo = Self::default();
            for (id, name) in users {
                repo.users.lock().unwrap().insert(*id, name.to_string());
            }
            repo
        }

        fn write_check(&self) -> std::result::Result<(), DbErr> {
            if self.fail_writes {
                return Err(DbErr::Custom("read-only".to_string()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl UserRepository for MemoryRepository {
        async fn find_by_id(&self, id: i32) -> std::result::Result<Option<User>, DbErr> {
            let users = self.users.lock().unwrap();
            Ok(users.get(&id).map(|name| User {
                id,
                name: name.clone(),
            }))
        }

        async fn insert(&self, name: String) -> std::result::Result<User, DbErr> {
            self.write_check()?;
            let mut users = self.users.lock().unwrap();
            let id = users.keys().next_back().copied().unwrap_or(0) + 1;
            users.insert(id, name.clone());
            Ok(User { id, name })
        }

        async fn update(&self, user: &User) -> std::result::Result<User, DbErr> {
            self.write_check()?;
            self.users
                .lock()
                .unwrap()
                .insert(user.id, user.name.clone());
            Ok(user.clone())
        }

        async fn delete(&self, id: i32) -> std::result::Result<u64, DbErr> {
            self.write_check()?;
            Ok(self.users.lock().unwrap().remove(&id).map_or(0, |_| 1))
        }
    }

    fn service(repo: MemoryRepository) -> UserService {
        UserService {
            repository: Arc::new(repo),
        }
    }

    fn update(id: i64, first: Option<&str>, last: Option<&str>) -> UpdateUserRequest {
        UpdateUserRequest {
            id,
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn register_joins_names() {
        let svc = service(MemoryRepository::default());
        let user = svc
            .register(RegisterUserRequest {
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(user.name, "Grace Hopper");
        assert_eq!(svc.find(user.id.into()).await.unwrap(), user);
    }

    #[tokio::test]
    async fn register_reports_insert_failure() {
        let svc = service(MemoryRepository {
            fail_writes: true,
            ..Default::default()
        });
        let err = svc
            .register(RegisterUserRequest {
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Fail Insert user to database");
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_a_lookup_failure() {
        let svc = service(MemoryRepository::default());
        let err = svc.update(update(9, Some("Ada"), None)).await.unwrap_err();
        assert!(matches!(err, UserhubError::LookupFailed));
    }

    #[tokio::test]
    async fn update_replaces_only_the_given_part() {
        let svc = service(MemoryRepository::with(&[(1, "Grace Hopper")]));
        let user = svc.update(update(1, Some("Amazing"), None)).await.unwrap();
        assert_eq!(user.name, "Amazing Hopper");
        assert_eq!(svc.find(1).await.unwrap().name, "Amazing Hopper");
    }

    #[tokio::test]
    async fn malformed_stored_name_is_left_untouched() {
        let svc = service(MemoryRepository::with(&[(1, "Cher")]));
        let err = svc.update(update(1, None, Some("Bono"))).await.unwrap_err();
        assert!(matches!(err, UserhubError::MalformedName));
        assert_eq!(svc.find(1).await.unwrap().name, "Cher");
    }

    #[tokio::test]
    async fn delete_requires_an_existing_user() {
        let svc = service(MemoryRepository::with(&[(1, "Grace Hopper")]));
        assert!(matches!(svc.delete(2).await, Err(UserhubError::UserNotFound)));
        svc.delete(1).await.unwrap();
        assert!(matches!(svc.find(1).await, Err(UserhubError::UserNotFound)));
    }

    #[tokio::test]
    async fn delete_reports_storage_failure() {
        let repo = MemoryRepository {
            fail_writes: true,
            ..MemoryRepository::with(&[(1, "Grace Hopper")])
        };
        let err = service(repo).delete(1).await.unwrap_err();
        assert_eq!(err.to_string(), "Fail to delete user");
    }

    #[tokio::test]
    async fn update_reports_storage_failure() {
        let repo = MemoryRepository {
            fail_writes: true,
            ..MemoryRepository::with(&[(1, "Grace Hopper")])
        };
        let svc = service(repo);
        let err = svc.update(update(1, Some("Amazing"), None)).await.unwrap_err();
        assert!(matches!(err, UserhubError::UpdateFailed(_)));
        assert_eq!(err.to_string(), "Fail to update user");
        assert_eq!(svc.find(1).await.unwrap().name, "Grace Hopper");
    }

    #[tokio::test]
    async fn ids_outside_the_column_range_are_unknown() {
        let svc = service(MemoryRepository::with(&[(1, "Grace Hopper")]));
        assert!(matches!(
            svc.find(99_999_999_999).await,
            Err(UserhubError::UserNotFound)
        ));
        assert!(matches!(
            svc.update(update(i64::MAX, Some("Ada"), None)).await,
            Err(UserhubError::LookupFailed)
        ));
    }
}
