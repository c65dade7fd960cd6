//! Single-page application bundle serving.
//!
//! Combined-deployment variant: the prebuilt frontend bundle is mounted at
//! the root, and any path that matched neither the API nor a blob route
//! falls back to the bundle's entry document so client-side routing works
//! on deep links.

use std::path::Path;

use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};

/// Static file service for the SPA bundle at `static_dir`.
///
/// Must be registered after every API route; `Files` at `/` swallows all
/// remaining paths.
pub fn spa_bundle(static_dir: &Path) -> Files {
    let entry = static_dir.join("index.html");
    Files::new("/", static_dir)
        .index_file("index.html")
        .default_handler(fn_service(move |req: ServiceRequest| {
            let entry = entry.clone();
            async move {
                let (req, _) = req.into_parts();
                let file = NamedFile::open_async(&entry).await?;
                let res = file.into_response(&req);
                Ok(ServiceResponse::new(req, res))
            }
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use tempfile::TempDir;

    fn bundle_dir() -> TempDir {
        let tmp = TempDir::new().expect("create temp dir");
        std::fs::write(tmp.path().join("index.html"), "<html>mural</html>")
            .expect("write entry document");
        std::fs::write(tmp.path().join("app.js"), "console.log('mural')")
            .expect("write asset");
        tmp
    }

    #[actix_web::test]
    async fn serves_bundle_assets() {
        let tmp = bundle_dir();
        let app = test::init_service(App::new().service(spa_bundle(tmp.path()))).await;
        let res =
            test::call_service(&app, test::TestRequest::get().uri("/app.js").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn unknown_paths_fall_back_to_the_entry_document() {
        let tmp = bundle_dir();
        let app = test::init_service(App::new().service(spa_bundle(tmp.path()))).await;
        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/galeria/2026").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        assert_eq!(body, "<html>mural</html>".as_bytes());
    }
}
