//! Curated content served when the live documentation cannot be used.

/// Facts about one supported proof system.
#[derive(Debug, Clone, Copy)]
pub struct ProofSystemCard {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub proof_size: &'static str,
    pub verification_time: &'static str,
    pub setup: &'static str,
    pub use_cases: &'static str,
}

impl ProofSystemCard {
    /// Render the card as the complete fallback block.
    pub fn render(&self) -> String {
        format!(
            "✅ {name} Proof System (Cached Data)

**Description**: {description}
**Use Cases**: {use_cases}
**Proof Size**: {proof_size}
**Verification Time**: {verification_time}
**Setup**: {setup}
**Supported By**: zkVerify native verification

**Key Features**:
- Fast verification
- Optimized for zkVerify
- Production-ready

**SDK Example**: See '{key}' proofType in zkverifyjs SDK

⚠️ Note: Using cached data. Live documentation fetch failed.
For latest information, visit: https://docs.zkverify.io/

Status: ⚠️ Fallback data (live fetch unavailable)",
            name = self.name,
            description = self.description,
            use_cases = self.use_cases,
            proof_size = self.proof_size,
            verification_time = self.verification_time,
            setup = self.setup,
            key = self.key,
        )
    }
}

pub const PROOF_SYSTEMS: [ProofSystemCard; 3] = [
    ProofSystemCard {
        key: "groth16",
        name: "Groth16",
        description: "Most widely used zkSNARK proof system",
        proof_size: "~200 bytes",
        verification_time: "~1-2ms",
        setup: "Requires trusted setup",
        use_cases: "General-purpose zero-knowledge proofs",
    },
    ProofSystemCard {
        key: "fflonk",
        name: "Fflonk",
        description: "PLONK variant with improved efficiency",
        proof_size: "~400 bytes",
        verification_time: "~2-5ms",
        setup: "Universal trusted setup",
        use_cases: "Modern zkEVM and complex circuits",
    },
    ProofSystemCard {
        key: "risc0",
        name: "RISC Zero",
        description: "General-purpose zkVM for Rust programs",
        proof_size: "~1-5KB",
        verification_time: "~10-50ms",
        setup: "Transparent (no trusted setup)",
        use_cases: "Verifiable computation, any Rust code",
    },
];

pub const OVERVIEW: &str = "## What is zkVerify?
zkVerify is a modular blockchain designed to be the complete solution for zero-knowledge proof verification. It acts as a ZK proof verification layer for any blockchain, dramatically reducing the costs and complexity of verifying proofs on-chain.

## Key Features
1. **Multi-Chain Support**: Works with any blockchain ecosystem
2. **Cost Reduction**: Up to 90% cheaper than native verification
3. **Proof Aggregation**: Batch verification for efficiency
4. **Multiple Proof Systems**: Supports Groth16, Fflonk, Risc0, and more
5. **Developer-Friendly**: SDKs for TypeScript, Rust, and more

## Architecture Components
- **Mainchain**: The core zkVerify blockchain
- **Proof Submission Interface**: API for submitting proofs
- **Verification Pallets**: Modular verification components
- **VFlow**: Verification workflow management
- **Settlement Layer**: Cross-chain settlement

## Use Cases
- Zero-knowledge rollups
- Privacy-preserving applications
- Verifiable computation
- Cross-chain bridges
- Identity verification
- Gaming and NFTs

## Getting Started
1. Connect a wallet to zkVerify testnet
2. Get test tokens from the faucet
3. Submit your first proof using the SDK
4. Monitor verification on the explorer

## Important Links
- Documentation: https://docs.zkverify.io/
- Explorer: https://zkverify-testnet.subscan.io/
- Faucet: https://www.faucy.com/zkverify-volta
- GitHub: https://github.com/zkverify
- Discord: https://discord.gg/zkverify";

pub const ARCHITECTURE: &str = "## Core Architecture
zkVerify is built on Substrate framework with custom verification pallets for different proof systems.

### Key Components

#### 1. Mainchain
- **Consensus**: GRANDPA + BABE
- **Block Time**: 6 seconds
- **Finality**: Instant with GRANDPA
- **Native Token**: ACME (testnet)

#### 2. Proof Submission Interface
- REST API for proof submission
- WebSocket for real-time updates
- Batch submission support
- Priority queue management

#### 3. Verification Pallets
Each proof system has its own pallet:
- **Groth16 Pallet**: For Groth16 proofs
- **Fflonk Pallet**: For Fflonk proofs
- **Risc0 Pallet**: For RISC Zero proofs
- **Extensible**: Add new verifiers easily

#### 4. Proof Aggregation
- Recursive proof aggregation
- Batch verification
- Merkle tree commitments
- Cost amortization

#### 5. Settlement Layer
- Cross-chain messaging
- State attestations
- Proof availability
- Finality guarantees

## Data Flow
1. User submits proof via API
2. Proof enters mempool
3. Validators include in block
4. Verification pallet processes
5. Result stored on-chain
6. Attestation available for settlement

## Security Model
- Decentralized validator set
- Slashing for misbehavior
- Proof validity guarantees
- Data availability layer";

pub const SDK: &str = "## zkverifyjs - TypeScript/JavaScript SDK

### Installation
```bash
npm install @zkverify/js-sdk
# or
yarn add @zkverify/js-sdk
```

### Basic Usage

#### Initialize Client
```typescript
import { ZkVerifyClient } from '@zkverify/js-sdk';

const client = new ZkVerifyClient({
  endpoint: 'wss://testnet-rpc.zkverify.io',
  seed: 'your-seed-phrase' // Optional for read-only
});

await client.connect();
```

#### Submit a Proof
```typescript
const result = await client.submitProof({
  proofType: 'groth16',
  proof: proof,
  publicInputs: publicInputs,
  vk: vk
});

console.log('Proof submitted:', result.hash);
```

#### Query Verification Status
```typescript
const status = await client.getProofStatus(proofHash);
console.log('Verification status:', status);

// Watch for updates
client.watchProof(proofHash, (update) => {
  console.log('Status update:', update);
});
```";

pub const TUTORIALS: &str = "## Tutorial 1: Submit Your First Proof

### Prerequisites
- Node.js 16+
- zkVerify testnet tokens
- A proof to verify (we'll use a sample)

### Step 1: Setup Project
```bash
mkdir zkverify-demo
cd zkverify-demo
npm init -y
npm install @zkverify/js-sdk
```

### Step 2: Create Script
```typescript
import { ZkVerifyClient } from '@zkverify/js-sdk';

async function main() {
  const client = new ZkVerifyClient({
    endpoint: 'wss://testnet-rpc.zkverify.io'
  });

  await client.connect();
  console.log('Connected to zkVerify testnet');

  // Submit proof
  const result = await client.submitProof({
    proofType: 'groth16',
    proof: sampleProof
  });

  console.log('Proof submitted!');
  console.log('Transaction hash:', result.hash);
}

main().catch(console.error);
```";

pub const TESTNET: &str = "✅ zkVerify Testnet (Volta) (Cached Data)

**Network Status**: 🟢 Active

**RPC Endpoints**:
- WebSocket: wss://testnet-rpc.zkverify.io
- HTTP: https://testnet-rpc.zkverify.io

**Block Explorer**: https://zkverify-testnet.subscan.io/

**Faucet**: https://www.faucy.com/zkverify-volta

**Network Details**:
- Native Token: ACME (testnet token)
- Block Time: 6 seconds
- Finality: Instant (GRANDPA consensus)
- Consensus: GRANDPA + BABE

**Getting Started**:
1. Visit faucet and request testnet ACME tokens
2. Add zkVerify testnet to your wallet
3. Connect to RPC endpoint via SDK
4. Start submitting proofs!

**Supported Proof Systems**:
- Groth16 ✅
- Fflonk ✅
- RISC Zero ✅

**Support Channels**:
- Discord: https://discord.gg/zkverify
- GitHub: https://github.com/zkverify
- Docs: https://docs.zkverify.io/

⚠️ Note: Using cached data. Live documentation fetch failed.
For latest network information, visit: https://docs.zkverify.io/

Status: ⚠️ Fallback data (live fetch unavailable)";

pub const MAINNET: &str = "⚠️ zkVerify Mainnet (Cached Data)

**Network Status**: 🔴 Coming Soon

**Expected Launch**: To be announced

**Current Recommendation**:
👉 Use testnet for development and testing
👉 Join Discord for mainnet launch announcements
👉 Check docs regularly for updates

**Resources**:
- Documentation: https://docs.zkverify.io/
- Announcements: https://discord.gg/zkverify

Status: ⚠️ Fallback data";

pub const TUTORIAL_FIRST_PROOF: &str = "1. Get testnet ACME tokens from https://www.faucy.com/zkverify-volta
2. Create a project: `npm init -y && npm install zkverifyjs`
3. Generate a Groth16 proof and verification key with your circuit tooling
4. Open a session against wss://testnet-rpc.zkverify.io
5. Submit the proof with its public inputs and verification key
6. Wait for the `IncludedInBlock` event, then `Finalized`
7. Look up the transaction on https://zkverify-testnet.subscan.io/";

pub const TUTORIAL_ZKVERIFYJS: &str = "1. Install the SDK: `npm install zkverifyjs`
2. Start a session: `zkVerifySession.start().Testnet().withAccount(seed)`
3. Pick the verifier for your proof system (groth16, fflonk, risc0)
4. Optionally register the verification key once and keep its hash
5. Call `verify().execute(...)` and listen to the returned events
6. Close the session with `session.close()` when done";

pub const TUTORIAL_RELAYER: &str = "1. Request a relayer API key from the zkVerify team
2. POST your proof to `/submit-proof/<API_KEY>` with the proof type, data and verification key
3. Keep the returned `jobId`
4. Poll `/job-status/<API_KEY>/<jobId>` until the status is `Finalized` or `Aggregated`
5. Read the attestation or aggregation details from the final status";

pub const TUTORIAL_RUN_A_NODE: &str = "1. Provision a Linux host with Docker, 4+ cores, 16 GB RAM and fast SSD storage
2. Clone the compose-zkverify-simplified repository
3. Run the init script and choose the node type (RPC, boot or validator)
4. Start the node and wait for it to sync with testnet
5. For validators: generate session keys, bond tokens and call `validate`";

pub const RELAYER_OVERVIEW: &str = "The relayer API accepts proofs over plain HTTPS and submits them to zkVerify on your behalf, so no wallet or chain connection is needed.

- Mainnet: https://relayer-api.horizenlabs.io/api/v1
- Testnet: https://relayer-api-testnet.horizenlabs.io/api/v1
- Authentication: API key in the request path
- Main endpoints: `POST /submit-proof/<API_KEY>`, `GET /job-status/<API_KEY>/<jobId>`";

pub const RELAYER_SUBMIT_PROOF: &str = "`POST /submit-proof/<API_KEY>`

Body fields:
- `proofType`: groth16, fflonk, risc0, ...
- `vkRegistered`: whether `vk` is a registered key hash
- `proofOptions`: proof-system options such as `library` and `curve`
- `proofData`: `{ proof, publicSignals, vk }`

Response: `{ jobId, optimisticVerify }`. Keep `jobId` to follow the job.";

pub const RELAYER_JOB_STATUS: &str = "`GET /job-status/<API_KEY>/<jobId>`

Status progression:
- `Queued` → `Valid` → `Submitted` → `IncludedInBlock` → `Finalized`
- `Aggregated` once the proof is part of an aggregation
- `Failed` with an error message otherwise

Poll every few seconds until a terminal status is reached.";
