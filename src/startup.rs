use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::config::Settings;
use crate::domain::GreetingService;
use crate::routes::{hello_world, hello_world_default};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, std::io::Error> {
        let address = format!("{}:{}", config.app.host, config.app.port);
        let listener = TcpListener::bind(&address)?;
        //port 0 means the OS picked one, so read back what we actually got
        let port = listener.local_addr()?.port();
        tracing::info!("listening on {}:{}", config.app.host, port);

        let server = run(listener, GreetingService::new())?;
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    //only returns once the server has stopped
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    greeting_service: GreetingService,
) -> Result<Server, std::io::Error> {
    //web::Data is an Arc, so every worker shares the one service and its id counter
    let greeting_service = web::Data::new(greeting_service);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/v1", web::get().to(hello_world_default))
            .route("/", web::get().to(hello_world))
            .app_data(greeting_service.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
