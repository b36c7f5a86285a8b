mod cli;

use actix_web::{App, HttpServer};

#[actix_web::main]
async fn main() -> Result<(), std::io::Error> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() == 1 {
        cli::run_repl();
    } else {
        if args[1] == "serve" {
            HttpServer::new(|| App::new().configure(vecmat::server::config))
                .bind("0.0.0.0:7878")?
                .run()
                .await?;

        } else {
            cli::run_single_command();
        }
    }

    Ok(())
}
