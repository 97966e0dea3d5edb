//! Built-in Docker and Kubernetes question bank

use crate::question::{Question, QuestionBank, QuestionId, OPTION_COUNT};

type Entry = (u32, &'static str, [&'static str; OPTION_COUNT], usize);

const DOCKER_QUESTIONS: &[Entry] = &[
    (
        1,
        "What does 'docker run' do?",
        ["Build image", "Start container", "Stop daemon", "Delete container"],
        1,
    ),
    (
        2,
        "Which file defines a Docker image?",
        ["Dockerfile", "Dockerimage.txt", "docker-compose.yml", "Makefile"],
        0,
    ),
    (
        3,
        "Purpose of Docker Compose?",
        ["Build images", "Manage multi-container apps", "Run single container", "Push to Hub"],
        1,
    ),
    (
        4,
        "Command to list running containers?",
        ["docker ps", "docker images", "docker run", "docker stop"],
        0,
    ),
    (
        5,
        "What is a Docker volume for?",
        ["Network config", "Persist data", "Expose ports", "Set env vars"],
        1,
    ),
    (
        6,
        "What is a Docker image layer?",
        ["A network interface", "A read-only template", "A storage volume", "An environment variable"],
        1,
    ),
    (
        7,
        "How to stop a running Docker container?",
        ["docker kill", "docker stop", "docker pause", "docker rm"],
        1,
    ),
    (
        8,
        "Command to remove a Docker image?",
        ["docker stop", "docker rm", "docker rmi", "docker delete"],
        2,
    ),
    (
        9,
        "What is Docker Hub?",
        ["Local image storage", "Cloud-based registry", "Container runtime", "Orchestration tool"],
        1,
    ),
    (
        10,
        "What is a Dockerfile instruction to copy files?",
        ["RUN", "CMD", "COPY", "ADD"],
        2,
    ),
    (
        11,
        "What is the default network in Docker?",
        ["bridge", "host", "none", "overlay"],
        0,
    ),
    (
        12,
        "How to expose a port in Dockerfile?",
        ["PORT", "EXPOSE", "OPEN", "MAP"],
        1,
    ),
    (
        13,
        "What is the entry point of a Docker container?",
        ["CMD", "RUN", "ENTRYPOINT", "USER"],
        2,
    ),
    (
        14,
        "How to set environment variables in Dockerfile?",
        ["VAR", "ENV", "SET", "EXPORT"],
        1,
    ),
    (
        15,
        "What is Docker Swarm?",
        ["Single-host container management", "Container orchestration tool", "Image building tool", "Network plugin"],
        1,
    ),
    (
        16,
        "What is Kubernetes?",
        ["Docker alternative", "Container orchestration platform", "Image registry", "Monitoring tool"],
        1,
    ),
    (
        17,
        "What is a Docker service in Swarm?",
        ["A single container", "A group of tasks", "A network configuration", "A storage volume"],
        1,
    ),
    (
        18,
        "How to scale a Docker service in Swarm?",
        ["docker scale", "docker resize", "docker up --scale", "docker service scale"],
        3,
    ),
    (
        19,
        "What is a pod in Kubernetes?",
        ["A single container", "Smallest deployable unit", "A network policy", "A storage class"],
        1,
    ),
    (
        20,
        "What is a Kubernetes deployment?",
        ["Networking rule", "Manages replica sets", "Storage configuration", "Security setting"],
        1,
    ),
    (
        21,
        "What is a Kubernetes service?",
        ["Exposes applications", "Defines storage", "Configures networking", "Manages security"],
        0,
    ),
    (
        22,
        "What is Helm in Kubernetes?",
        ["Security tool", "Package manager", "Monitoring agent", "Networking plugin"],
        1,
    ),
    (
        23,
        "What is a Dockerfile instruction to execute commands?",
        ["COPY", "ADD", "ENV", "RUN"],
        3,
    ),
    (
        24,
        "What is the purpose of '.dockerignore' file?",
        ["Ignore image layers", "Exclude files from image", "Define network rules", "Set environment variables"],
        1,
    ),
    (
        25,
        "What is a container registry?",
        ["Local storage only", "Centralized image storage", "Network configuration file", "Container runtime engine"],
        1,
    ),
];

/// Bank served when no `--questions` file is configured.
pub fn docker_bank() -> QuestionBank {
    let questions = DOCKER_QUESTIONS
        .iter()
        .map(|&(id, prompt, options, answer)| Question {
            id: QuestionId(id),
            prompt: prompt.to_owned(),
            options: options.iter().map(|o| (*o).to_owned()).collect(),
            answer,
        })
        .collect();

    QuestionBank::new(questions).expect("built-in question bank is valid")
}
