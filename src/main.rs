use std::{fs::File, io::Write, net::SocketAddr};

use cluster_api_provider_openstack::{
    Error, Result,
    cli::{
        CliArgs, CliCliCommands, CliCommands, CrdCommands, CrdGenerateArgs,
        CrdGenerateArgsFormat, WebhookCommands, WebhookRunArgs, parse,
    },
    crd::{self, WebhookService},
    http_server, https_server,
    metrics::Metrics,
    otel,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = parse();

    https_server::install_crypto_provider();

    let provider = otel::Provider::new(&cli)?;
    provider.init_tracing_subscriber();

    let result = match &cli.command {
        CliCommands::Cli(cli_cli) => match &cli_cli.command {
            CliCliCommands::Markdown(_) => {
                cli_markdown();
                Ok(())
            }
        },
        CliCommands::Crd(crd) => match &crd.command {
            CrdCommands::Generate(generate) => crd_generate(generate),
        },
        CliCommands::Webhook(webhook) => match &webhook.command {
            WebhookCommands::Run(run) => webhook_run(&provider, run).await,
        },
    };

    if let Err(error) = &result {
        tracing::error!(error =% error, "command failed");
    }

    provider.shutdown()?;

    result
}

fn cli_markdown() {
    print!("{}", clap_markdown::help_markdown::<CliArgs>());
}

fn crd_generate(generate: &CrdGenerateArgs) -> Result<()> {
    let ca_bundle = generate
        .ca_bundle_file
        .as_ref()
        .map(std::fs::read)
        .transpose()
        .map_err(Error::Io)?;

    let crds = crd::generate(&WebhookService {
        name: generate.webhook_service_name.clone(),
        namespace: generate.webhook_service_namespace.clone(),
        port: generate.webhook_service_port,
        ca_bundle,
    })?;

    let mut documents = Vec::with_capacity(crds.len());
    for crd in &crds {
        let content = match generate.format {
            CrdGenerateArgsFormat::Json => serde_json::to_string_pretty(crd).map_err(Error::Serde)?,
            CrdGenerateArgsFormat::Yaml => serde_yaml::to_string(crd).map_err(Error::SerdeYaml)?,
        };
        documents.push((crd.spec.names.singular.clone().unwrap_or_default(), content));
    }

    if let Some(output) = &generate.output {
        let extension = match generate.format {
            CrdGenerateArgsFormat::Json => "json",
            CrdGenerateArgsFormat::Yaml => "yaml",
        };

        for (name, content) in documents {
            let path = output.join(format!("{name}.{extension}"));
            File::create(&path)
                .and_then(|mut file| file.write_all(content.as_bytes()))
                .map_err(Error::Io)?;
            tracing::info!(path =? path, "crd generated");
        }
    } else {
        let separator = match generate.format {
            CrdGenerateArgsFormat::Json => "\n",
            CrdGenerateArgsFormat::Yaml => "---\n",
        };

        for (_, content) in documents {
            print!("{separator}{content}");
        }
    }

    Ok(())
}

async fn webhook_run(provider: &otel::Provider, run: &WebhookRunArgs) -> Result<()> {
    let addr = socket_addr(&run.host, run.port)?;
    let health_addr = socket_addr(&run.health_host, run.health_port)?;

    let metrics = Metrics::new(provider.meter());

    let http_server = http_server::run(health_addr);
    let https_server = https_server::run(addr, &run.tls_cert_file, &run.tls_key_file, metrics);

    serve(http_server, https_server).await
}

/// Runs both servers until each has shut down. The webhook keeps draining
/// conversions after the probe server has stopped.
async fn serve(
    http_server: impl Future<Output = Result<()>>,
    https_server: impl Future<Output = Result<()>>,
) -> Result<()> {
    tokio::try_join!(http_server, https_server)?;
    Ok(())
}

fn socket_addr(host: &str, port: u16) -> Result<SocketAddr> {
    format!("{host}:{port}")
        .parse()
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidInput, e)))
}
