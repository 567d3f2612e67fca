use futures::task::{LocalFutureObj, LocalSpawn, SpawnError};

/// 通过 Leptos 的本地任务队列执行分离任务
pub struct LeptosSpawner;

impl LocalSpawn for LeptosSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        leptos::task::spawn_local(future);
        Ok(())
    }
}
