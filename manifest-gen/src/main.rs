// SPDX-FileCopyrightText: The submarine-operator Authors
//
// SPDX-License-Identifier: MIT

use anyhow::Result;
use clap::Parser;
use crds::{
    Submarine, SubmarineDatabase, SubmarineMinio, SubmarineMlflow, SubmarineServer, SubmarineSpec,
    SubmarineStorage, SubmarineTensorboard,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::CustomResourceExt;
use log::info;
use std::{
    fs::{self, File},
    io::Write,
    path::PathBuf,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Output directory to save rendered YAML
    #[arg(long, default_value = "manifests")]
    output_dir: PathBuf,

    /// Namespace where the sample Submarine is created
    #[arg(long, default_value = "submarine-user-test")]
    namespace: String,

    /// Submarine release used for the sample component images
    #[arg(long, default_value = "0.8.0")]
    version: String,

    /// Storage size of the database volume in the sample
    #[arg(long, default_value = "1Gi")]
    database_storage_size: String,

    /// Storage size of the tensorboard, mlflow and minio volumes in the sample
    #[arg(long, default_value = "10Gi")]
    workload_storage_size: String,
}

pub fn generate_crd(args: &Args) -> Result<()> {
    let crd = Submarine::crd();

    let output_path = args.output_dir.join("submarine_crd.yaml");

    let yaml = serde_yaml::to_string(&crd)?;
    let mut file = File::create(&output_path)?;
    file.write_all(yaml.as_bytes())?;

    info!("Generated CRD at {}", output_path.display());

    Ok(())
}

pub fn generate_submarine_cr(args: &Args) -> Result<()> {
    let sample = Submarine {
        metadata: ObjectMeta {
            name: Some("example-submarine".to_string()),
            namespace: Some(args.namespace.clone()),
            ..Default::default()
        },
        spec: SubmarineSpec {
            version: args.version.clone(),
            server: Some(SubmarineServer {
                image: format!("apache/submarine:server-{}", args.version),
                replicas: Some(1),
            }),
            database: Some(SubmarineDatabase {
                image: format!("apache/submarine:database-{}", args.version),
                replicas: Some(1),
                storage_size: args.database_storage_size.clone(),
                mysql_root_password_secret: "submarine-database-secret".to_string(),
            }),
            tensorboard: Some(SubmarineTensorboard {
                enabled: Some(true),
                storage_size: args.workload_storage_size.clone(),
            }),
            mlflow: Some(SubmarineMlflow {
                enabled: Some(true),
                storage_size: args.workload_storage_size.clone(),
            }),
            minio: Some(SubmarineMinio {
                enabled: Some(true),
                storage_size: args.workload_storage_size.clone(),
            }),
            storage: Some(SubmarineStorage {
                storage_type: "host".to_string(),
                host_path: "/mnt/submarine".to_string(),
                nfs_path: String::new(),
                nfs_ip: String::new(),
            }),
        },
        status: None,
    };

    let output_path = args.output_dir.join("submarine_cr.yaml");

    let yaml = serde_yaml::to_string(&sample)?;
    let mut file = File::create(&output_path)?;
    file.write_all(yaml.as_bytes())?;

    info!("Generated Submarine CR at {}", output_path.display());

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    fs::create_dir_all(&args.output_dir)?;

    generate_crd(&args)?;
    generate_submarine_cr(&args)?;

    Ok(())
}
